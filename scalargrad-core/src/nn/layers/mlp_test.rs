use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_structure() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(3, &[4, 4, 1])?;
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.input_count(), 3);
    assert_eq!(mlp.output_count(), 1);
    assert_eq!(mlp.layers()[0].input_count(), 3);
    assert_eq!(mlp.layers()[1].input_count(), 4);
    assert_eq!(mlp.layers()[2].input_count(), 4);
    // 4*(3+1) + 4*(4+1) + 1*(4+1)
    assert_eq!(mlp.parameters().len(), 16 + 20 + 5);
    Ok(())
}

#[test]
fn test_mlp_last_layer_is_linear() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(2, &[3, 2])?;
    assert!(mlp.layers()[0].neurons().iter().all(|n| n.is_nonlinear()));
    assert!(mlp.layers()[1].neurons().iter().all(|n| !n.is_nonlinear()));
    assert_eq!(
        mlp.to_string(),
        "MLP of [Layer of [ReLU Neuron(2), ReLU Neuron(2), ReLU Neuron(2)], \
         Layer of [Linear Neuron(3), Linear Neuron(3)]]"
    );
    Ok(())
}

#[test]
fn test_mlp_single_layer_is_linear() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(2, &[1])?;
    assert!(!mlp.layers()[0].neurons()[0].is_nonlinear());
    Ok(())
}

#[test]
fn test_mlp_forward_output_shape() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(3, &[4, 4, 1])?;
    let out = mlp.call(&[2.0, 3.0, -1.0])?;
    assert!(out.as_scalar().is_some());

    let wide = Mlp::new(2, &[3, 2])?;
    let out = wide.call(&[1.0, 0.5])?;
    assert_eq!(out.len(), 2);
    Ok(())
}

#[test]
fn test_mlp_invalid_arguments() {
    assert!(matches!(
        Mlp::new(3, &[]),
        Err(ScalarGradError::InvalidArgument { .. })
    ));
    assert!(Mlp::new(0, &[2]).is_err());
    assert!(Mlp::new(2, &[3, 0, 1]).is_err());
    let mlp = Mlp::new(2, &[2]).expect("mlp");
    assert!(matches!(
        mlp.call(&[1.0]),
        Err(ScalarGradError::InputLengthMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn test_mlp_named_parameters() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new(1, &[2, 1])?;
    let named = mlp.named_parameters();
    assert_eq!(named.len(), mlp.num_parameters());
    assert_eq!(named[0].0, "layers.0.neurons.0.bias");
    assert_eq!(named.last().map(|(n, _)| n.as_str()), Some("layers.1.neurons.0.weight.1"));
    for ((_, named_value), param) in named.iter().zip(mlp.parameters()) {
        assert!(named_value.ptr_eq(&param));
    }
    Ok(())
}

#[test]
fn test_mlp_backward_reaches_all_layers() -> Result<(), ScalarGradError> {
    let mlp = Mlp::new_with_rng(2, &[3, 1], &mut StdRng::seed_from_u64(11))?;
    // Positive first-layer pre-activations so no ReLU is at or below its kink.
    for neuron in mlp.layers()[0].neurons() {
        neuron.bias().set_data(5.0);
    }
    let out = mlp.call(&[0.3, -0.2])?.into_scalar().expect("scalar output");
    out.backward();
    let last = &mlp.layers()[1].neurons()[0];
    assert_eq!(last.bias().grad(), 1.0);
    for (neuron, w) in mlp.layers()[0].neurons().iter().zip(last.weights()) {
        assert_eq!(neuron.bias().grad(), w.data());
    }

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_mlp_grad_check_through_inputs() -> Result<(), GradCheckError> {
    let mlp = Mlp::new_with_rng(2, &[4, 1], &mut StdRng::seed_from_u64(5))?;
    for neuron in mlp.layers()[0].neurons() {
        neuron.bias().set_data(3.0);
    }
    let func = |inputs: &[Value]| {
        let out = mlp.forward(inputs)?.into_vec();
        Ok(out[0].tanh())
    };
    check_grad(func, &[0.1, 0.2], 1e-6, 1e-5)
}
