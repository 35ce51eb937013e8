use crate::RuntimeError;

/// Text representation of a runtime value
pub trait Stringify {
    fn stringify(self) -> String;
}

impl Stringify for bool {
    fn stringify(self) -> String {
        String::from(if self { "true" } else { "false" })
    }
}

impl Stringify for char {
    fn stringify(self) -> String {
        String::from(self)
    }
}

macro_rules! impl_stringify_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Stringify for $ty {
                fn stringify(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_stringify_with_display!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, &str, String,
);

pub fn stringify<T>(value: T) -> String
where
    T: Stringify,
{
    value.stringify()
}

/// Stringifies a character given as a code point, which must be a Unicode scalar value.
pub fn stringify_code_point(code_point: u32) -> Result<String, RuntimeError> {
    char::from_u32(code_point)
        .map(Stringify::stringify)
        .ok_or(RuntimeError::InvalidChar { code_point })
}

#[cfg(test)]
mod tests {
    use crate::{stringify, stringify_code_point, RuntimeError};
    use assert2::check;

    #[test]
    fn booleans_render_as_words() {
        check!(stringify(true) == "true");
        check!(stringify(false) == "false");
    }

    #[test]
    fn char_renders_as_itself() {
        check!(stringify('A') == "A");
        check!(stringify('é') == "é");
    }

    #[test]
    fn integers_render_as_decimal() {
        check!(stringify(-42) == "-42");
        check!(stringify(0u8) == "0");
        check!(stringify(i64::MIN) == "-9223372036854775808");
        check!(stringify(u64::MAX) == "18446744073709551615");
    }

    #[test]
    fn floats_render_shortest_text() {
        check!(stringify(3.5) == "3.5");
        check!(stringify(-0.25f32) == "-0.25");
        check!(stringify(2.0) == "2");
    }

    #[test]
    fn text_renders_as_itself() {
        check!(stringify("abc") == "abc");
        check!(stringify(String::from("abc")) == "abc");
    }

    #[test]
    fn char_code_point_is_checked() {
        check!(stringify_code_point(0x41) == Ok("A".to_owned()));
        check!(
            stringify_code_point(0xD800) == Err(RuntimeError::InvalidChar { code_point: 0xD800 })
        );
    }
}
