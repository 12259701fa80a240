use conv::prelude::*;
use num_traits::float::Float;

/// Creates uniform distributed values, both `start` and `end` included
///
/// A single-point grid is `[start]`, an empty grid is returned for `size == 0`.
///
/// # Examples
///
/// ```
/// use logistic_common::linspace;
///
/// let a = linspace(0.0, 1.0, 3);
///
/// assert_eq!(0.0, a[0]);
/// assert_eq!(0.5, a[1]);
/// assert_eq!(1.0, a[2]);
///
/// assert_eq!(vec![2.5], linspace(2.5, 4.0, 1));
/// ```
pub fn linspace<T>(start: T, end: T, size: usize) -> Vec<T>
where
    T: Float + ValueFrom<usize>,
{
    match size {
        0 => vec![],
        1 => vec![start],
        _ => {
            let intervals: T = (size - 1).value_as::<T>().unwrap();
            let step = (end - start) / intervals;
            (0..size)
                .map(|i| {
                    if i == size - 1 {
                        end
                    } else {
                        start + step * i.value_as::<T>().unwrap()
                    }
                })
                .collect()
        }
    }
}
