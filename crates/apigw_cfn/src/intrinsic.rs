//! CloudFormation intrinsic expressions.
//!
//! Only the handful of intrinsics the gateway template needs are modelled:
//! plain strings, `Ref`, `Fn::GetAtt` and `Fn::Join`.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Pseudo parameter holding the stack name.
pub const STACK_NAME: &str = "AWS::StackName";

/// Pseudo parameter holding the deployment region.
pub const REGION: &str = "AWS::Region";

/// A value that CloudFormation resolves at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(String),
    Ref(String),
    GetAtt(String, String),
    Join(String, Vec<Expr>),
}

impl Expr {
    /// `{"Ref": name}`
    pub fn reference(name: impl Into<String>) -> Self {
        Expr::Ref(name.into())
    }

    /// `{"Fn::GetAtt": [resource, attribute]}`
    pub fn get_att(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        Expr::GetAtt(resource.into(), attribute.into())
    }

    /// `{"Fn::Join": [delimiter, parts]}`
    pub fn join(delimiter: impl Into<String>, parts: Vec<Expr>) -> Self {
        Expr::Join(delimiter.into(), parts)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.to_string())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(value)
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expr::Literal(value) => serializer.serialize_str(value),
            Expr::Ref(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", name)?;
                map.end()
            }
            Expr::GetAtt(resource, attribute) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[resource, attribute])?;
                map.end()
            }
            Expr::Join(delimiter, parts) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::Join", &(delimiter, parts))?;
                map.end()
            }
        }
    }
}
