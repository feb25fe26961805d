//! Seeded parameter initialisation
//!
//! Burn's `Tensor::random` draws from backend-global state. Every parameter in
//! this crate is instead drawn from an explicit [`StdRng`] so a model built from
//! the same seed is identical on every run.

use burn::module::Param;
use burn::nn::Linear;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a generator from an optional seed, falling back to OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform `U(-bound, bound)` parameter of the given shape.
pub fn uniform_param<B: Backend, const D: usize, R: Rng + ?Sized>(
    shape: [usize; D],
    bound: f32,
    rng: &mut R,
    device: &B::Device,
) -> Param<Tensor<B, D>> {
    let count = shape.iter().product::<usize>();
    let data: Vec<f32> = (0..count).map(|_| rng.gen_range(-bound..=bound)).collect();
    let tensor: Tensor<B, D> = Tensor::<B, 1>::from_floats(data.as_slice(), device).reshape(shape);
    Param::from_tensor(tensor)
}

/// Fully-connected layer with `U(-k, k)` weights, `k = 1/sqrt(fan)`, and zero bias.
///
/// Weight layout follows `burn::nn::Linear`: `[d_input, d_output]`.
pub fn seeded_linear<B: Backend, R: Rng + ?Sized>(
    d_input: usize,
    d_output: usize,
    fan: usize,
    with_bias: bool,
    rng: &mut R,
    device: &B::Device,
) -> Linear<B> {
    let bound = 1.0 / (fan.max(1) as f32).sqrt();
    let weight = uniform_param([d_input, d_output], bound, rng, device);
    let bias = with_bias.then(|| Param::from_tensor(Tensor::zeros([d_output], device)));

    Linear { weight, bias }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_same_seed_same_weights() {
        let device = Default::default();
        let a = seeded_linear::<TestBackend, _>(6, 4, 4, true, &mut rng_from_seed(Some(7)), &device);
        let b = seeded_linear::<TestBackend, _>(6, 4, 4, true, &mut rng_from_seed(Some(7)), &device);

        let wa = a.weight.val().into_data().to_vec::<f32>().unwrap();
        let wb = b.weight.val().into_data().to_vec::<f32>().unwrap();
        assert_eq!(wa, wb);
    }

    #[test]
    fn test_bounds_and_zero_bias() {
        let device = Default::default();
        let layer = seeded_linear::<TestBackend, _>(8, 16, 16, true, &mut rng_from_seed(Some(1)), &device);

        assert_eq!(layer.weight.val().dims(), [8, 16]);
        let weights = layer.weight.val().into_data().to_vec::<f32>().unwrap();
        assert!(weights.iter().all(|w| w.abs() <= 0.25));

        let bias = layer.bias.expect("bias requested").val();
        let bias_sum: f32 = bias.abs().sum().into_scalar();
        assert_eq!(bias_sum, 0.0);
    }

    #[test]
    fn test_without_bias() {
        let device = Default::default();
        let layer = seeded_linear::<TestBackend, _>(3, 3, 3, false, &mut rng_from_seed(None), &device);
        assert!(layer.bias.is_none());
    }
}
