#[macro_export]
macro_rules! assert_match {
    ($expression:expr, $( $pattern:pat )|+ $( if $guard: expr )? $(,)?) => {
        assert!(match $expression {
            $( $pattern )|+ $( if $guard )? => true,
            _ => false
        })
    };
    ($expression:expr, $( $pattern:pat )|+ $( if $guard: expr )? $(,)?, $($arg:tt)*) => {
        assert!(match $expression {
            $( $pattern )|+ $( if $guard )? => true,
            _ => false
        }, $($arg)*)
    }
}

/// Asserts that a `Result` failed with the given crate error.
#[macro_export]
macro_rules! assert_parse_error {
    ($result:expr, $error:expr) => {
        match $result {
            Ok(value) => panic!("expected {:?}, parsed {:?}", $error, value),
            Err(error) => assert_eq!(error, $error),
        }
    };
}
