//! LSTM sequence layer
//!
//! Full recurrent layer that runs an [`LSTMCell`] across the time dimension of
//! a batch-first sequence.

use crate::cells::LSTMCell;
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::Rng;

/// LSTM RNN Layer
///
/// Processes `[batch, seq, input_size]` sequences and emits the hidden state at
/// every timestep. State always starts from zeros, nothing is carried over
/// between calls.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct Lstm<B: Backend> {
    /// The LSTM cell for processing individual timesteps
    cell: LSTMCell<B>,
}

impl<B: Backend> Lstm<B> {
    /// Create a new LSTM layer
    ///
    /// # Arguments
    /// * `input_size` - Number of input features
    /// * `hidden_size` - Number of hidden units (also the output width)
    /// * `rng` - Generator supplying the initial weights
    /// * `device` - Device to create the module on
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        rng: &mut R,
        device: &B::Device,
    ) -> Self {
        Self {
            cell: LSTMCell::new(input_size, hidden_size, rng, device),
        }
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.cell.input_size()
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    pub(crate) fn cell(&self) -> &LSTMCell<B> {
        &self.cell
    }

    /// Forward pass through the LSTM layer
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch, seq, input_size]`
    ///
    /// # Returns
    /// Tuple of (output, (final_hidden, final_cell)) where:
    /// - output: `[batch, seq, hidden_size]`
    /// - final_hidden, final_cell: `[batch, hidden_size]`
    ///
    /// The caller guarantees `seq >= 1` and a matching feature width.
    pub fn forward(&self, input: Tensor<B, 3>) -> (Tensor<B, 3>, (Tensor<B, 2>, Tensor<B, 2>)) {
        let device = input.device();
        let [batch_size, seq_len, _] = input.dims();

        let mut state = self.cell.zero_state(batch_size, &device);
        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            // input[batch, t, features] -> [batch, features]
            let step_input = input.clone().narrow(1, t, 1).squeeze_dim(1);

            state = self.cell.forward(step_input, state);
            outputs.push(state.0.clone());
        }

        let output = Tensor::stack(outputs, 1); // [batch, seq, hidden_size]
        (output, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::rng_from_seed;
    use burn::backend::NdArray;
    use burn::tensor::backend::Backend as BurnBackend;
    use burn::tensor::Distribution;

    type TestBackend = NdArray<f32>;
    type TestDevice = <TestBackend as BurnBackend>::Device;

    fn get_test_device() -> TestDevice {
        Default::default()
    }

    fn test_layer(input_size: usize, hidden_size: usize) -> Lstm<TestBackend> {
        Lstm::new(input_size, hidden_size, &mut rng_from_seed(Some(3)), &get_test_device())
    }

    #[test]
    fn test_lstm_layer_creation() {
        let lstm = test_layer(20, 50);

        assert_eq!(lstm.input_size(), 20);
        assert_eq!(lstm.hidden_size(), 50);
    }

    #[test]
    fn test_lstm_layer_forward() {
        let device = get_test_device();
        let lstm = test_layer(20, 50);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 20], &device);
        let (output, (h, c)) = lstm.forward(input);

        assert_eq!(output.dims(), [4, 10, 50]);
        assert_eq!(h.dims(), [4, 50]);
        assert_eq!(c.dims(), [4, 50]);
    }

    #[test]
    fn test_last_output_is_final_hidden() {
        let device = get_test_device();
        let lstm = test_layer(5, 7);

        let input =
            Tensor::<TestBackend, 3>::random([2, 6, 5], Distribution::Uniform(-1.0, 1.0), &device);
        let (output, (h, _)) = lstm.forward(input);

        let last: Tensor<TestBackend, 2> = output.narrow(1, 5, 1).squeeze_dim(1);
        let diff: f32 = (last - h).abs().sum().into_scalar();
        assert!(diff < 1e-6);
    }

    #[test]
    fn test_state_reset_between_calls() {
        let device = get_test_device();
        let lstm = test_layer(4, 8);

        let input =
            Tensor::<TestBackend, 3>::random([3, 5, 4], Distribution::Uniform(-1.0, 1.0), &device);
        let (first, _) = lstm.forward(input.clone());
        let (second, _) = lstm.forward(input);

        let diff: f32 = (first - second).abs().sum().into_scalar();
        assert!(diff < 1e-6, "Each call must start from a zero state");
    }

    #[test]
    fn test_single_timestep() {
        let device = get_test_device();
        let lstm = test_layer(3, 2);

        let input = Tensor::<TestBackend, 3>::ones([2, 1, 3], &device);
        let (output, _) = lstm.forward(input);

        assert_eq!(output.dims(), [2, 1, 2]);
    }
}
