use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Query keys and values must not leak pair separators.
const QUERY_COMPONENT: &AsciiSet = &USERINFO.add(b'&').add(b'+').add(b'%');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, QUERY_COMPONENT).to_string()
}

/// Build query string (without leading `?`) from ordered key / value pairs.
pub fn query_string(parameters: &[(String, String)]) -> String {
    parameters
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                url_encode(key.as_bytes()),
                url_encode(value.as_bytes())
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case("plain" => "plain"; "unreserved characters")]
    #[test_case("a b" => "a%20b"; "space")]
    #[test_case("a&b=c" => "a%26b%3Dc"; "pair separators")]
    #[test_case("1+1%" => "1%2B1%25"; "plus and percent")]
    fn encode_query_component(input: &str) -> String {
        url_encode(input.as_bytes())
    }

    #[test]
    fn keep_parameters_order_in_query_string() {
        let parameters = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "3".to_string()),
        ];

        assert_eq!(query_string(&parameters), "b=2&a=1&b=3");
    }
}
