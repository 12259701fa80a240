use conv::*;

/// Float number trait, it is implemented for [f32] and [f64] only
pub trait Float:
    ndarray::NdFloat
    + num_traits::Float
    + ValueFrom<usize>
    + ValueFrom<f32>
    + ApproxFrom<f64>
{
    fn half() -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}
