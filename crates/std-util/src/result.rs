/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// An optional predicate can follow the expression; the macro then also
/// asserts that the error satisfies it, which keeps tests on error kinds
/// down to one line:
///
/// ```ignore
/// let err = assert_err!(mapping.entity(CUSTOMER), Error::is_duplicate_member_mapping);
/// ```
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(actual) => panic!("expected `Err`; actual=Ok({:?})", actual),
        }
    };
    ($e:expr, $pred:expr) => {{
        let err = $crate::assert_err!($e);
        assert!(($pred)(&err), "error did not match `{}`; actual={}", stringify!($pred), err);
        err
    }};
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({})", err),
        }
    };
}
