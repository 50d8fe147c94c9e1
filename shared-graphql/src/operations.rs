use crate::documents::{GET_ALL_MEMBERS, HANDLE_REGISTER};
use crate::envelope::{GraphQlRequest, InputVariables};
use membership::{MemberPageRequest, MembersPage, StatusChange};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A GraphQL operation with typed input and normalized output.
pub trait Operation {
    const NAME: &'static str;
    const DOCUMENT: &'static str;

    type Input: Serialize;
    type Data: DeserializeOwned;
    type Output;

    fn request(input: &Self::Input) -> GraphQlRequest<'static, InputVariables<'_, Self::Input>> {
        GraphQlRequest {
            query: Self::DOCUMENT,
            operation_name: Self::NAME,
            variables: InputVariables { input },
        }
    }

    fn output(data: Self::Data) -> Self::Output;
}

pub struct GetAllMembers;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllMembersData {
    pub get_all_members: MembersPage,
}

impl Operation for GetAllMembers {
    const NAME: &'static str = "GetAllMembers";
    const DOCUMENT: &'static str = GET_ALL_MEMBERS;

    type Input = MemberPageRequest;
    type Data = GetAllMembersData;
    type Output = MembersPage;

    fn output(data: Self::Data) -> Self::Output {
        data.get_all_members
    }
}

pub struct HandleRegister;

/// The schema names the flag `result`; older servers answer `success`.
#[derive(Debug, Deserialize)]
pub struct HandleRegisterPayload {
    #[serde(alias = "success")]
    pub result: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleRegisterData {
    pub handle_register: HandleRegisterPayload,
}

impl Operation for HandleRegister {
    const NAME: &'static str = "handleRegister";
    const DOCUMENT: &'static str = HANDLE_REGISTER;

    type Input = StatusChange;
    type Data = HandleRegisterData;
    type Output = bool;

    fn output(data: Self::Data) -> Self::Output {
        data.handle_register.result
    }
}
