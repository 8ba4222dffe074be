#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::nn::layers::{Layer, Neuron};
    use crate::nn::module::Module;
    use crate::value::Value;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_parameter_count() -> Result<(), ScalarGradError> {
        let layer = Layer::new(3, 4, true)?;
        assert_eq!(layer.input_count(), 3);
        assert_eq!(layer.output_count(), 4);
        let params = layer.parameters();
        assert_eq!(params.len(), 4 * (3 + 1));
        assert_eq!(layer.num_parameters(), 16);
        Ok(())
    }

    #[test]
    fn test_layer_zero_grad() -> Result<(), ScalarGradError> {
        let layer = Layer::new(3, 4, true)?;
        for (i, p) in layer.parameters().iter().enumerate() {
            p.add_grad(i as f64 + 1.0);
        }
        layer.zero_grad();
        assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
        Ok(())
    }

    #[test]
    fn test_layer_parameters_are_stable() -> Result<(), ScalarGradError> {
        let layer = Layer::new_with_rng(2, 3, false, &mut StdRng::seed_from_u64(3))?;
        let first = layer.parameters();
        let second = layer.parameters();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert!(a.ptr_eq(b));
        }
        // neurons in order, bias then weights within each
        assert!(first[0].ptr_eq(layer.neurons()[0].bias()));
        assert!(first[3].ptr_eq(layer.neurons()[1].bias()));
        assert!(first[8].ptr_eq(&layer.neurons()[2].weights()[1]));
        Ok(())
    }

    #[test]
    fn test_layer_forward_vector_and_scalar() -> Result<(), ScalarGradError> {
        let wide = Layer::new(2, 3, true)?;
        let out = wide.call(&[1.0, -1.0])?;
        assert_eq!(out.len(), 3);
        assert!(out.as_scalar().is_none());

        let narrow = Layer::new(2, 1, false)?;
        let out = narrow.call(&[1.0, -1.0])?;
        assert!(out.as_scalar().is_some());
        Ok(())
    }

    #[test]
    fn test_layer_forward_applies_each_neuron() -> Result<(), ScalarGradError> {
        let n0 = Neuron::from_parameters(vec![Value::new(1.0), Value::new(2.0)], Value::new(0.5), false)?;
        let n1 = Neuron::from_parameters(vec![Value::new(-1.0), Value::new(1.0)], Value::new(0.0), true)?;
        let layer = Layer::from_neurons(vec![n0, n1])?;
        let out = layer.call(&[3.0, 1.0])?.into_vec();
        assert_eq!(out[0].data(), 0.5 + 3.0 + 2.0);
        assert_eq!(out[1].data(), 0.0);
        Ok(())
    }

    #[test]
    fn test_layer_invalid_arguments() {
        assert!(matches!(
            Layer::new(3, 0, true),
            Err(ScalarGradError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Layer::new(0, 2, true),
            Err(ScalarGradError::InvalidArgument { .. })
        ));
        assert!(Layer::from_neurons(Vec::new()).is_err());

        let a = Neuron::new(2, true).expect("neuron");
        let b = Neuron::new(3, true).expect("neuron");
        assert!(Layer::from_neurons(vec![a, b]).is_err());
    }

    #[test]
    fn test_layer_named_parameters_and_display() -> Result<(), ScalarGradError> {
        let layer = Layer::new(1, 2, true)?;
        let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["neurons.0.bias", "neurons.0.weight.0", "neurons.1.bias", "neurons.1.weight.0"]
        );
        assert_eq!(layer.to_string(), "Layer of [ReLU Neuron(1), ReLU Neuron(1)]");
        Ok(())
    }
}
