/// Builds a [`Config`](crate::Config) from `name => value` pairs.
///
/// Each value is converted with `ToString` and read with the option's own
/// grammar, exactly as [`Config::set_option`](crate::Config::set_option)
/// does. The result is normalized with [`Config::adjust`](crate::Config::adjust).
/// Rejected pairs are available from
/// [`Config::option_errors`](crate::Config::option_errors).
///
/// ```rust
/// use tidy_config::{tidy_config, OptionId};
///
/// let config = tidy_config! {
///     "indent" => "auto",
///     "indent-spaces" => 4,
///     "wrap" => 0,
/// };
/// assert_eq!(config.get_int(OptionId::IndentSpaces), 4);
/// assert_eq!(config.get_int(OptionId::WrapLen), u64::MAX);
/// ```
#[macro_export]
macro_rules! tidy_config {
    // Empty session
    () => {
        $crate::Config::new()
    };

    ($($name:literal => $value:expr),+ $(,)?) => {{
        let mut config = $crate::Config::new();
        $(
            config.set_option($name, &::std::string::ToString::to_string(&$value));
        )+
        config.adjust();
        config
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Error, OptionId, TriState};

    #[test]
    fn test_tidy_config_empty() {
        let config = tidy_config!();
        assert!(!config.diff_against_default());
    }

    #[test]
    fn test_tidy_config_values() {
        let config = tidy_config! {
            "indent" => "yes",
            "quiet" => true,
            "tab-size" => 4u64,
        };
        assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Yes);
        assert!(config.get_bool(OptionId::Quiet));
        assert_eq!(config.get_int(OptionId::TabSize), 4);
        assert!(config.option_errors().is_empty());
    }

    #[test]
    fn test_tidy_config_records_errors() {
        let config = tidy_config! {
            "no-such-option" => 1,
            "wrap" => "wide",
        };
        assert_eq!(
            config.option_errors(),
            &[
                Error::unknown_option("no-such-option"),
                Error::bad_argument("wrap"),
            ]
        );
    }
}
