use strum_macros::{Display, EnumIter};
use url::Url;

/// Documents an applicant submits with a sign-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum DocumentKind {
    #[strum(to_string = "Business registration certificate")]
    BusinessRegistration,
    #[strum(to_string = "Certificate of employment")]
    EmploymentCertificate,
}

impl DocumentKind {
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::BusinessRegistration => "business-registration",
            DocumentKind::EmploymentCertificate => "employment-certificate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DocumentAction {
    #[strum(to_string = "Preview")]
    Preview,
    #[strum(to_string = "Download")]
    Download,
}

impl DocumentAction {
    fn as_query(&self) -> &'static str {
        match self {
            DocumentAction::Preview => "preview",
            DocumentAction::Download => "download",
        }
    }
}

/// Link into the document service: `{base}/{email}/{kind}?action={action}`.
pub fn document_link(
    base_url: &str,
    email: &str,
    kind: DocumentKind,
    action: DocumentAction,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(email)
        .push(kind.slug());
    url.query_pairs_mut()
        .clear()
        .append_pair("action", action.as_query());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_link() {
        let url = document_link(
            "https://docs.example.test/documents",
            "ops@acme.test",
            DocumentKind::BusinessRegistration,
            DocumentAction::Preview,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.example.test/documents/ops@acme.test/business-registration?action=preview"
        );
    }

    #[test]
    fn test_trailing_slash_and_encoding() {
        let url = document_link(
            "https://docs.example.test/documents/",
            "a b/c@x.test",
            DocumentKind::EmploymentCertificate,
            DocumentAction::Download,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.example.test/documents/a%20b%2Fc@x.test/employment-certificate?action=download"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(
            document_link(
                "not a url",
                "a@x.test",
                DocumentKind::BusinessRegistration,
                DocumentAction::Preview
            )
            .is_err()
        );
    }
}
