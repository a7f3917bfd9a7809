use thiserror::Error;

pub type Result<T> = std::result::Result<T, RandomError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("bound must be positive, got {bound}")]
    InvalidBound { bound: String },

    #[error("no acceptable value after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl RandomError {
    pub fn invalid_bound(bound: impl ToString) -> Self {
        Self::InvalidBound {
            bound: bound.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RandomError::invalid_bound(-3).to_string(),
            "bound must be positive, got -3"
        );
        assert_eq!(
            RandomError::Exhausted { attempts: 5 }.to_string(),
            "no acceptable value after 5 attempts"
        );
    }
}
