use std::fmt::Display;

use anyhow::anyhow;
use prost::Message;
use prost_types::Any;

use crate::{
    proto::{MsgCancelFeeShare, MsgRegisterFeeShare, MsgUpdateFeeShare},
    AnyResult,
};

pub trait IntoAnyhowResult {
    type Output;
    fn into_anyresult(self) -> AnyResult<Self::Output>;
}

impl<T, E> IntoAnyhowResult for Result<T, E>
where
    E: Display,
{
    type Output = T;

    fn into_anyresult(self) -> AnyResult<T> {
        self.map_err(|err| anyhow!("{}", err))
    }
}

/// Protobuf message that knows its own type url.
pub trait TypeUrl {
    const TYPE_URL: &'static str;
}

/// Message that can be packed into a transaction body.
pub trait SharedAny: Clone {
    fn into_any(self) -> Any;
}

impl<T> SharedAny for T
where
    T: Message + TypeUrl + Clone,
{
    fn into_any(self) -> Any {
        Any {
            type_url: T::TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }
}

impl TypeUrl for MsgRegisterFeeShare {
    const TYPE_URL: &'static str = "/juno.feeshare.v1.MsgRegisterFeeShare";
}

impl TypeUrl for MsgUpdateFeeShare {
    const TYPE_URL: &'static str = "/juno.feeshare.v1.MsgUpdateFeeShare";
}

impl TypeUrl for MsgCancelFeeShare {
    const TYPE_URL: &'static str = "/juno.feeshare.v1.MsgCancelFeeShare";
}
