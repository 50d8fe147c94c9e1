use serde::{Deserialize, Serialize};

/// Request body POSTed to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: V,
}

/// Both operations take a single `$input` variable
#[derive(Debug, Serialize)]
pub struct InputVariables<'a, T> {
    pub input: &'a T,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Response body: `data` on success, `errors` when the resolver failed
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<D> GraphQlResponse<D> {
    pub fn into_data(self) -> shared::Result<D> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(shared::Error::GraphQl(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| shared::Error::InvalidResponse("response has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_take_precedence() {
        let response: GraphQlResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "forbidden" }, { "message": "try later" }]
        }))
        .unwrap();

        match response.into_data() {
            Err(shared::Error::GraphQl(msg)) => assert_eq!(msg, "forbidden; try later"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data() {
        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            response.into_data(),
            Err(shared::Error::InvalidResponse(_))
        ));
    }
}
