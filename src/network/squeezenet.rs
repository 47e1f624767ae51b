/// One step of the SqueezeNet v1.1 forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Convolution with `{name}/kernel` and `{name}/bias`.
    Conv {
        name: &'static str,
        stride: usize,
        pad: usize,
    },
    Relu,
    MaxPool {
        size: usize,
        stride: usize,
        pad: usize,
    },
    /// Squeeze 1x1, then expand 1x1 and 3x3 in parallel, concatenated on depth.
    Fire(usize),
    /// Drops the last row and column, standing in for uneven padding.
    TrimEdge,
    /// Global average pool down to one score per class.
    AvgPool,
}

/// The fixed forward pass from preprocessed input to class logits.
pub const GRAPH: [Layer; 16] = [
    Layer::Conv {
        name: "conv1",
        stride: 2,
        pad: 0,
    },
    Layer::Relu,
    Layer::MaxPool {
        size: 3,
        stride: 2,
        pad: 0,
    },
    Layer::Fire(2),
    Layer::Fire(3),
    Layer::TrimEdge,
    Layer::MaxPool {
        size: 3,
        stride: 2,
        pad: 0,
    },
    Layer::Fire(4),
    Layer::Fire(5),
    Layer::MaxPool {
        size: 3,
        stride: 2,
        pad: 0,
    },
    Layer::Fire(6),
    Layer::Fire(7),
    Layer::Fire(8),
    Layer::Fire(9),
    Layer::Conv {
        name: "conv10",
        stride: 1,
        pad: 0,
    },
    Layer::AvgPool,
];

impl Layer {
    /// Checkpoint variables this layer reads.
    pub fn variables(&self) -> Vec<String> {
        match self {
            Self::Conv { name, .. } => vec![format!("{}/kernel", name), format!("{}/bias", name)],
            Self::Fire(id) => ["squeeze1x1", "expand1x1", "expand3x3"]
                .iter()
                .flat_map(|part| {
                    ["kernel", "bias"]
                        .iter()
                        .map(move |kind| format!("fire{}/{}/{}", id, part, kind))
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Every variable a checkpoint must provide to run `GRAPH`.
pub fn variables() -> Vec<String> {
    GRAPH.iter().flat_map(Layer::variables).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_two_variables() {
        let names = variables();
        assert_eq!(names.len(), 52);
        let unique = names.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn fire_modules_in_order() {
        let fires = GRAPH
            .iter()
            .filter_map(|layer| match layer {
                Layer::Fire(id) => Some(*id),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(fires, (2..=9).collect::<Vec<_>>());
    }

    #[test]
    fn fire_variable_names() {
        let names = Layer::Fire(4).variables();
        assert!(names.contains(&"fire4/squeeze1x1/kernel".to_string()));
        assert!(names.contains(&"fire4/expand3x3/bias".to_string()));
        assert_eq!(names.len(), 6);
    }
}
