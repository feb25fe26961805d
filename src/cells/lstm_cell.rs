use crate::init::seeded_linear;
use burn::module::Module;
use burn::nn::Linear;
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::Rng;

/// Single-timestep LSTM cell
///
/// Implements the LSTM equations:
/// - g = tanh(W_xg @ x + b_g + W_hg @ h)
/// - i = sigmoid(W_xi @ x + b_i + W_hi @ h)
/// - f = sigmoid(W_xf @ x + b_f + W_hf @ h + 1)
/// - o = sigmoid(W_xo @ x + b_o + W_ho @ h)
/// - c' = f * c + i * g
/// - h' = o * tanh(c')
#[derive(Module, Debug)]
pub struct LSTMCell<B: Backend> {
    input_size: usize,
    hidden_size: usize,
    input_map: Linear<B>,     // Maps input to 4 * hidden_size (with bias)
    recurrent_map: Linear<B>, // Maps hidden state to 4 * hidden_size (no bias)
}

impl<B: Backend> LSTMCell<B> {
    /// Create a new LSTM cell
    ///
    /// Weights are drawn from `U(-1/sqrt(hidden_size), 1/sqrt(hidden_size))`
    /// using `rng`; the input bias starts at zero.
    ///
    /// # Arguments
    /// * `input_size` - Size of the input features
    /// * `hidden_size` - Size of the hidden state
    /// * `rng` - Generator supplying the initial weights
    /// * `device` - Device to create the module on
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        rng: &mut R,
        device: &B::Device,
    ) -> Self {
        let input_map =
            seeded_linear(input_size, 4 * hidden_size, hidden_size, true, rng, device);
        let recurrent_map =
            seeded_linear(hidden_size, 4 * hidden_size, hidden_size, false, rng, device);

        Self {
            input_size,
            hidden_size,
            input_map,
            recurrent_map,
        }
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Shapes of the (input, recurrent) weight matrices currently held.
    pub(crate) fn weight_dims(&self) -> ([usize; 2], [usize; 2]) {
        (
            self.input_map.weight.val().dims(),
            self.recurrent_map.weight.val().dims(),
        )
    }

    /// Zeroed `(hidden, cell)` state for a batch
    pub fn zero_state(&self, batch_size: usize, device: &B::Device) -> (Tensor<B, 2>, Tensor<B, 2>) {
        (
            Tensor::zeros([batch_size, self.hidden_size], device),
            Tensor::zeros([batch_size, self.hidden_size], device),
        )
    }

    /// Perform a forward pass through the LSTM cell
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `states` - Tuple of (hidden_state, cell_state), each of shape `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state)
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        states: (Tensor<B, 2>, Tensor<B, 2>),
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let (hidden_state, cell_state) = states;

        let z = self.input_map.forward(input) + self.recurrent_map.forward(hidden_state);

        let chunks = z.chunk(4, 1);
        let candidate = chunks[0].clone().tanh();
        let input_gate = activation::sigmoid(chunks[1].clone());
        let forget_gate = activation::sigmoid(chunks[2].clone() + 1.0);
        let output_gate = activation::sigmoid(chunks[3].clone());

        let new_cell = cell_state * forget_gate + candidate * input_gate;
        let new_hidden = new_cell.clone().tanh() * output_gate;

        (new_hidden, new_cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::rng_from_seed;
    use burn::backend::NdArray;
    use burn::tensor::backend::Backend as BurnBackend;

    type TestBackend = NdArray<f32>;
    type TestDevice = <TestBackend as BurnBackend>::Device;

    fn get_test_device() -> TestDevice {
        Default::default()
    }

    fn test_cell(input_size: usize, hidden_size: usize) -> LSTMCell<TestBackend> {
        LSTMCell::new(input_size, hidden_size, &mut rng_from_seed(Some(42)), &get_test_device())
    }

    #[test]
    fn test_lstm_cell_creation() {
        let cell = test_cell(20, 50);

        assert_eq!(cell.input_size(), 20);
        assert_eq!(cell.hidden_size(), 50);
        assert_eq!(cell.weight_dims(), ([20, 200], [50, 200]));
    }

    #[test]
    fn test_lstm_forward() {
        let device = get_test_device();
        let cell = test_cell(20, 50);

        let batch_size = 4;
        let input = Tensor::<TestBackend, 2>::zeros([batch_size, 20], &device);
        let (new_h, new_c) = cell.forward(input, cell.zero_state(batch_size, &device));

        assert_eq!(new_h.dims(), [batch_size, 50]);
        assert_eq!(new_c.dims(), [batch_size, 50]);
    }

    #[test]
    fn test_zero_input_zero_state_stays_zero() {
        // With zero bias the candidate is tanh(0) = 0, so nothing enters the cell
        let device = get_test_device();
        let cell = test_cell(6, 8);

        let input = Tensor::<TestBackend, 2>::zeros([3, 6], &device);
        let (h, c) = cell.forward(input, cell.zero_state(3, &device));

        let h_sum: f32 = h.abs().sum().into_scalar();
        let c_sum: f32 = c.abs().sum().into_scalar();
        assert!(h_sum < 1e-6);
        assert!(c_sum < 1e-6);
    }

    #[test]
    fn test_lstm_state_evolves() {
        let device = get_test_device();
        let cell = test_cell(10, 20);

        let mut state = cell.zero_state(1, &device);
        for _ in 0..3 {
            let input = Tensor::<TestBackend, 2>::ones([1, 10], &device);
            state = cell.forward(input, state);
        }

        let c_sum: f32 = state.1.abs().sum().into_scalar();
        assert!(c_sum > 0.0, "Cell state should change after processing a sequence");
    }

    #[test]
    fn test_lstm_forget_gate() {
        let device = get_test_device();
        let cell = test_cell(10, 20);

        let h = Tensor::<TestBackend, 2>::zeros([1, 20], &device);
        let c = Tensor::<TestBackend, 2>::ones([1, 20], &device) * 10.0;
        let input = Tensor::<TestBackend, 2>::zeros([1, 10], &device);

        let (_, new_c) = cell.forward(input, (h, c));

        // f = sigmoid(1) < 1 with zero input, so the memory decays
        let c_sum_new: f32 = new_c.sum().into_scalar();
        assert!(c_sum_new < 10.0 * 20.0 - 0.1, "Forget gate should decay cell state");
    }

    #[test]
    fn test_lstm_batch_sizes() {
        let device = get_test_device();
        let cell = test_cell(20, 50);

        for batch_size in [1, 4, 16, 32] {
            let input = Tensor::<TestBackend, 2>::zeros([batch_size, 20], &device);
            let (new_h, new_c) = cell.forward(input, cell.zero_state(batch_size, &device));

            assert_eq!(new_h.dims(), [batch_size, 50]);
            assert_eq!(new_c.dims(), [batch_size, 50]);
        }
    }
}
