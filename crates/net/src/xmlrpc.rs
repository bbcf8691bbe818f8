//! XML-RPC wire format
//!
//! Only what a client needs: encoding a `methodCall` and decoding a
//! `methodResponse` (including faults) into a [`Value`] tree.

use pypi2pkgbuild_errors::{Error, NetworkError};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::BTreeMap;

/// A decoded XML-RPC value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    DateTime(String),
    Base64(String),
    Array(Vec<Value>),
    Struct(BTreeMap<String, Value>),
}

impl Value {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Look up a struct member
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|members| members.get(key))
    }

    /// Whether the value carries anything: nil, false, zero and empty
    /// strings, arrays or structs do not.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Double(d) => *d != 0.0,
            Self::String(s) | Self::DateTime(s) | Self::Base64(s) => !s.is_empty(),
            Self::Array(items) => !items.is_empty(),
            Self::Struct(members) => !members.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Encode a method call document
#[must_use]
pub fn encode_call(method: &str, params: &[Value]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<methodCall>");
    out.push_str("<methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        encode_value(&mut out, param);
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>\n");
    out
}

fn encode_value(out: &mut String, value: &Value) {
    out.push_str("<value>");
    match value {
        Value::Nil => out.push_str("<nil/>"),
        Value::Bool(b) => {
            out.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::Int(i) => out.push_str(&format!("<int>{i}</int>")),
        Value::Double(d) => out.push_str(&format!("<double>{d}</double>")),
        Value::String(s) => wrap(out, "string", &escape(s.as_str())),
        Value::DateTime(s) => wrap(out, "dateTime.iso8601", &escape(s.as_str())),
        Value::Base64(s) => wrap(out, "base64", &escape(s.as_str())),
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                encode_value(out, item);
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member>");
                wrap(out, "name", &escape(name.as_str()));
                encode_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
}

fn wrap(out: &mut String, tag: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Decode a method response
///
/// # Errors
///
/// Returns `NetworkError::RpcFault` when the service answered with a
/// fault, and `NetworkError::MalformedResponse` when the document is not
/// a well-formed XML-RPC response.
pub fn parse_response(xml: &str) -> Result<Value, Error> {
    let root = parse_document(xml)?;
    if root.name != "methodResponse" {
        return Err(malformed(format!(
            "expected <methodResponse>, found <{}>",
            root.name
        )));
    }

    let body = root
        .children
        .first()
        .ok_or_else(|| malformed("empty <methodResponse>"))?;

    match body.name.as_str() {
        "params" => {
            let value = body.child("param")?.child("value")?;
            decode_value(value)
        }
        "fault" => {
            let fault = decode_value(body.child("value")?)?;
            let code = fault
                .get("faultCode")
                .and_then(Value::as_i64)
                .unwrap_or_default();
            let message = fault
                .get("faultString")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Err(NetworkError::RpcFault { code, message }.into())
        }
        other => Err(malformed(format!("unexpected <{other}> in response"))),
    }
}

fn malformed(message: impl Into<String>) -> Error {
    NetworkError::MalformedResponse(message.into()).into()
}

/// Element with its child elements and concatenated text
#[derive(Debug, Default)]
struct Node {
    name: String,
    children: Vec<Node>,
    text: String,
}

impl Node {
    fn new(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Result<&Node, Error> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| malformed(format!("<{}> has no <{name}>", self.name)))
    }
}

fn parse_document(xml: &str) -> Result<Node, Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Node::new(e.local_name().as_ref())),
            Ok(Event::Empty(e)) => {
                attach(&mut stack, &mut root, Node::new(e.local_name().as_ref()))?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| malformed("unbalanced closing tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(t)) => {
                if let Some(top) = stack.last_mut() {
                    let text = t.unescape().map_err(|e| malformed(e.to_string()))?;
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(malformed(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    if !stack.is_empty() {
        return Err(malformed("unexpected end of document"));
    }
    root.ok_or_else(|| malformed("empty document"))
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), Error> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(malformed("multiple root elements")),
    }
    Ok(())
}

fn decode_value(node: &Node) -> Result<Value, Error> {
    // <value>text</value> without a type element is a string
    let Some(typed) = node.children.first() else {
        return Ok(Value::String(node.text.clone()));
    };

    let text = typed.text.trim();
    match typed.name.as_str() {
        "string" => Ok(Value::String(typed.text.clone())),
        "int" | "i4" | "i8" => text
            .parse()
            .map(Value::Int)
            .map_err(|_| malformed(format!("invalid integer {text:?}"))),
        "boolean" => match text {
            "1" => Ok(Value::Bool(true)),
            "0" => Ok(Value::Bool(false)),
            other => Err(malformed(format!("invalid boolean {other:?}"))),
        },
        "double" => text
            .parse()
            .map(Value::Double)
            .map_err(|_| malformed(format!("invalid double {text:?}"))),
        "nil" => Ok(Value::Nil),
        "dateTime.iso8601" => Ok(Value::DateTime(text.to_string())),
        "base64" => Ok(Value::Base64(text.to_string())),
        "array" => typed
            .child("data")?
            .children
            .iter()
            .filter(|c| c.name == "value")
            .map(decode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        "struct" => {
            let mut members = BTreeMap::new();
            for member in typed.children.iter().filter(|c| c.name == "member") {
                let name = member.child("name")?.text.clone();
                let value = decode_value(member.child("value")?)?;
                members.insert(name, value);
            }
            Ok(Value::Struct(members))
        }
        other => Err(malformed(format!("unsupported value type <{other}>"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(value: &str) -> String {
        format!(
            "<?xml version='1.0'?>\n<methodResponse>\n<params>\n<param>\n{value}\n</param>\n</params>\n</methodResponse>\n"
        )
    }

    #[test]
    fn test_encode_call() {
        let xml = encode_call("package_releases", &["requests".into(), true.into()]);
        assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
        assert!(xml.contains("<methodName>package_releases</methodName>"));
        assert!(xml.contains("<param><value><string>requests</string></value></param>"));
        assert!(xml.contains("<param><value><boolean>1</boolean></value></param>"));
    }

    #[test]
    fn test_encode_escapes_text() {
        let xml = encode_call("release_data", &["a<b&c".into()]);
        assert!(xml.contains("<string>a&lt;b&amp;c</string>"));
    }

    #[test]
    fn test_decode_array_of_strings() {
        let xml = response(
            "<value><array><data>\n<value><string>1.0</string></value>\n<value>2.0</value>\n</data></array></value>",
        );
        let value = parse_response(&xml).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![Value::String("1.0".into()), Value::String("2.0".into())])
        );
    }

    #[test]
    fn test_decode_struct_with_mixed_members() {
        let xml = response(
            "<value><struct>\
             <member><name>name</name><value><string>requests</string></value></member>\
             <member><name>downloads</name><value><int>42</int></value></member>\
             <member><name>license</name><value><nil/></value></member>\
             <member><name>summary</name><value><string>a &amp; b</string></value></member>\
             <member><name>empty</name><value><string/></value></member>\
             <member><name>hidden</name><value><boolean>0</boolean></value></member>\
             </struct></value>",
        );
        let value = parse_response(&xml).unwrap();
        assert_eq!(value.get("name").and_then(Value::as_str), Some("requests"));
        assert_eq!(value.get("downloads").and_then(Value::as_i64), Some(42));
        assert_eq!(value.get("license"), Some(&Value::Nil));
        assert_eq!(value.get("summary").and_then(Value::as_str), Some("a & b"));
        assert_eq!(value.get("empty").and_then(Value::as_str), Some(""));
        assert_eq!(value.get("hidden"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_string_whitespace_is_preserved() {
        let xml = response("<value><string>  padded  </string></value>");
        assert_eq!(
            parse_response(&xml).unwrap(),
            Value::String("  padded  ".into())
        );
    }

    #[test]
    fn test_decode_fault() {
        let xml = "<?xml version='1.0'?><methodResponse><fault><value><struct>\
                   <member><name>faultCode</name><value><int>1</int></value></member>\
                   <member><name>faultString</name><value><string>no such package</string></value></member>\
                   </struct></value></fault></methodResponse>";
        match parse_response(xml).unwrap_err() {
            Error::Network(NetworkError::RpcFault { code, message }) => {
                assert_eq!(code, 1);
                assert_eq!(message, "no such package");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_documents() {
        for xml in [
            "",
            "<html><body>oops</body></html>",
            "<methodResponse><params><param></param></params></methodResponse>",
            "<methodResponse><params><param><value><int>x</int></value></param></params></methodResponse>",
            "<methodResponse><params>",
        ] {
            assert!(
                matches!(
                    parse_response(xml),
                    Err(Error::Network(NetworkError::MalformedResponse(_)))
                ),
                "accepted {xml:?}"
            );
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Struct(BTreeMap::new()).is_truthy());
        assert!(!Value::Array(Vec::new()).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::String("x".into()).is_truthy());
        assert!(Value::Int(3).is_truthy());
    }
}
