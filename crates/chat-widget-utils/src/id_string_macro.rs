// chat-widget/chat-widget-utils
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a string-backed identifier newtype which serializes transparently.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the identifier is empty or consists of whitespace only.
            #[allow(dead_code)]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    id_string!(
        /// Test identifier.
        SampleId
    );

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::from("user-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""user-1""#);
        assert_eq!(
            serde_json::from_str::<Vec<SampleId>>(r#"["a","b"]"#).unwrap(),
            vec![SampleId::from("a"), SampleId::from("b")]
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(SampleId::from("  ").is_blank());
        assert!(!SampleId::from("x").is_blank());
    }
}
