//! Wire body of a lead submission.

use serde::{Deserialize, Serialize};

/// JSON body posted to the lead endpoint.
///
/// `age` stays a string, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub age: String,
    pub consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_documented_body() {
        let lead = LeadSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: "29".into(),
            consent: true,
        };
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({"name": "Ada", "email": "ada@example.com", "age": "29", "consent": true})
        );
    }
}
