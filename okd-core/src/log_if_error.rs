use std::fmt::Display;

/// Swallow an error after logging it
///
/// Read paths use this to degrade to an empty or missing result instead of
/// failing the request.
pub trait LogIfErrorExt<T> {
    fn or_with_log(self, action: &str, default: T) -> T;
    fn or_with_log_default(self, action: &str) -> T
    where
        T: Default;
}

impl<T, E> LogIfErrorExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_with_log(self, action: &str, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, action, "read failed, falling back to a default");
                default
            }
        }
    }

    fn or_with_log_default(self, action: &str) -> T
    where
        T: Default,
    {
        self.or_with_log(action, T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_values_pass_through() {
        let result: Result<i32, String> = Ok(7);
        assert_eq!(result.or_with_log("reading", 0), 7);
    }

    #[test]
    fn errors_fall_back_to_default() {
        let result: Result<Vec<i32>, String> = Err("disk on fire".to_string());
        assert!(result.or_with_log_default("listing").is_empty());

        let result: Result<Option<i32>, String> = Err("gone".to_string());
        assert_eq!(result.or_with_log("fetching", None), None);
    }
}
