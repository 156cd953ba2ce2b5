use std::fmt;

use ndarray::{ArrayBase, Dimension, RawData};
use serde::{Deserialize, Serialize};

/// Sequence of dimension sizes describing an array, outermost axis first.
///
/// Two shapes are equal only if they have the same number of dimensions and
/// every dimension size matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dimensions: Vec<usize>) -> Self {
        Shape(dimensions)
    }

    /// Captures the shape of any ndarray array or view.
    pub fn of<S, D>(array: &ArrayBase<S, D>) -> Self
    where
        S: RawData,
        D: Dimension,
    {
        Shape(array.shape().to_vec())
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total element count. A 0-d shape holds exactly one element.
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }
}

/// Renders as a tuple: `()`, `(3,)`, `(2, 2)`.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "()"),
            [only] => write!(f, "({only},)"),
            [first, rest @ ..] => {
                write!(f, "({first}")?;
                for dim in rest {
                    write!(f, ", {dim}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;
    use ndarray::{arr0, array, Array3};

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(vec![]).to_string(), "()");
        assert_eq!(Shape::new(vec![3]).to_string(), "(3,)");
        assert_eq!(Shape::new(vec![2, 2]).to_string(), "(2, 2)");
        assert_eq!(Shape::new(vec![4, 0, 7]).to_string(), "(4, 0, 7)");
    }

    #[test]
    fn test_size() {
        assert_eq!(Shape::new(vec![]).size(), 1);
        assert_eq!(Shape::new(vec![5, 4, 3]).size(), 60);
        assert_eq!(Shape::new(vec![5, 0]).size(), 0);
    }

    #[test]
    fn test_of_array() {
        let scalar = arr0(1.5);
        assert_eq!(Shape::of(&scalar).ndim(), 0);

        let matrix = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(Shape::of(&matrix).dims(), &[2, 3]);

        let cube = Array3::<f32>::zeros((2, 3, 4));
        assert_eq!(Shape::of(&cube.view()), Shape::new(vec![2, 3, 4]));
    }

    #[test]
    fn test_dimensionality_is_part_of_equality() {
        // Same element count, different layout.
        assert_ne!(Shape::new(vec![4]), Shape::new(vec![2, 2]));
        assert_ne!(Shape::new(vec![1]), Shape::new(vec![]));
    }

    #[test]
    fn test_serializes_as_list() {
        let json = serde_json::to_string(&Shape::new(vec![2, 3])).unwrap();
        assert_eq!(json, "[2,3]");
        let back: Shape = serde_json::from_str("[7]").unwrap();
        assert_eq!(back, Shape::new(vec![7]));
    }
}
