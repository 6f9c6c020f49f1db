use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A key-value pair stored in a tree node. All comparisons delegate to the
/// key so that entries order the same way their keys do.
#[derive(Serialize, Deserialize, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Ord for Entry<T, U>
where
    T: Ord,
{
    fn cmp(&self, other: &Entry<T, U>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, U> PartialOrd for Entry<T, U>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Entry<T, U>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<T, U> PartialEq for Entry<T, U>
where
    T: Ord,
{
    fn eq(&self, other: &Entry<T, U>) -> bool {
        self.key == other.key
    }
}

impl<T, U> Eq for Entry<T, U> where T: Ord {}

#[cfg(test)]
mod tests {
    use super::Entry;
    use serde_test::{assert_tokens, Token};
    use std::cmp::Ordering;

    #[test]
    fn test_cmp_ignores_value() {
        let lhs = Entry { key: 1, value: 10 };
        let rhs = Entry { key: 2, value: 0 };
        assert_eq!(lhs.cmp(&rhs), Ordering::Less);
        assert_eq!(lhs, Entry { key: 1, value: 99 });
    }

    #[test]
    fn test_ser_de() {
        let entry = Entry {
            key: 1u32,
            value: 2u32,
        };

        assert_tokens(
            &entry,
            &[
                Token::Struct {
                    name: "Entry",
                    len: 2,
                },
                Token::Str("key"),
                Token::U32(1),
                Token::Str("value"),
                Token::U32(2),
                Token::StructEnd,
            ],
        );
    }
}
