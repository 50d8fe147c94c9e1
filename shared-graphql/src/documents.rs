/// Paged member list.
pub const GET_ALL_MEMBERS: &str = r#"
  query GetAllMembers($input: MemberPageRequest!) {
    getAllMembers(input: $input) {
      content {
        email
        organizationName
        bizNumber
        representativeName
        contactName
        role
        accountStatus
        approvedAt
        rejectReason
        registerStatus
        createdAt
        checkedAt
      }
      totalPages
      totalElements
      currentPage
      isFirst
      isLast
    }
  }
"#;

/// Approve or reject a sign-up request.
pub const HANDLE_REGISTER: &str = r#"
  mutation handleRegister($input: JoinApplyRequestDTO) {
    handleRegister(input: $input) {
      result
    }
  }
"#;
