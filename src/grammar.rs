lazy_static! {
    /// A-Z
    static ref UPPER_ALPHA: [bool; 256] = {
        let mut result = [false; 256];

        for i in 65..91 {
            result[i] = true;
        }

        result
    };

    /// 0-9
    static ref DIGIT: [bool; 256] = {
        let mut result = [false; 256];

        for i in 48..58 {
            result[i] = true;
        }

        result
    };

    /// A-Z, a-z, 0-9
    static ref ALPHANUMERIC: [bool; 256] = {
        let mut result = [false; 256];

        for i in 0..256 {
            result[i] = UPPER_ALPHA[i] || DIGIT[i] || (97..123).contains(&i);
        }

        result
    };

    /// path-char = ALPHANUMERIC | "." | "/"
    static ref PATH_CHAR: [bool; 256] = {
        let mut result = *ALPHANUMERIC;
        result[b'.' as usize] = true;
        result[b'/' as usize] = true;
        result
    };

    /// query-char = ALPHANUMERIC | "," | "." | "=" | "&"
    static ref QUERY_CHAR: [bool; 256] = {
        let mut result = *ALPHANUMERIC;

        for s in ",.=&".bytes() {
            result[s as usize] = true;
        }

        result
    };

    /// field-char = %x20-7D
    static ref FIELD_CHAR: [bool; 256] = {
        let mut result = [false; 256];

        for i in 0x20..0x7E {
            result[i] = true;
        }

        result
    };
}

#[inline]
pub fn is_upper_alpha(byte: u8) -> bool {
    UPPER_ALPHA[byte as usize]
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    DIGIT[byte as usize]
}

#[inline]
pub fn is_alphanumeric(byte: u8) -> bool {
    ALPHANUMERIC[byte as usize]
}

#[inline]
pub fn is_path_char(byte: u8) -> bool {
    PATH_CHAR[byte as usize]
}

#[inline]
pub fn is_query_char(byte: u8) -> bool {
    QUERY_CHAR[byte as usize]
}

#[inline]
pub fn is_field_value_char(byte: u8) -> bool {
    FIELD_CHAR[byte as usize]
}

/// Same range as a field value, minus the `:` separator.
#[inline]
pub fn is_field_name_char(byte: u8) -> bool {
    byte != b':' && FIELD_CHAR[byte as usize]
}

#[inline]
pub fn is_space(byte: u8) -> bool {
    byte == 32
}

#[cfg(test)]
mod tests {
    use super::{
        is_field_name_char, is_field_value_char, is_path_char, is_query_char,
        ALPHANUMERIC,
    };

    #[test]
    fn test_alphanumeric() {
        let str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
        let digits: Vec<u8> = str.bytes().collect();

        for i in 0..=255 {
            assert_eq!(digits.contains(&i), ALPHANUMERIC[i as usize]);
        }
    }

    #[test]
    fn test_path_and_query_chars() {
        assert!(is_path_char(b'/'));
        assert!(is_path_char(b'.'));
        assert!(!is_path_char(b'?'));
        assert!(!is_path_char(b'-'));

        assert!(is_query_char(b'&'));
        assert!(is_query_char(b','));
        assert!(!is_query_char(b'/'));
        assert!(!is_query_char(b' '));
    }

    #[test]
    fn test_field_chars() {
        assert!(is_field_value_char(b' '));
        assert!(is_field_value_char(b':'));
        assert!(is_field_value_char(b'}'));
        assert!(!is_field_value_char(b'~'));
        assert!(!is_field_value_char(b'\t'));

        assert!(!is_field_name_char(b':'));
        assert!(is_field_name_char(b'-'));
    }
}
