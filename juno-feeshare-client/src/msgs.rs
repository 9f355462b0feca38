use prost_types::Any;

use crate::{
    proto::{MsgCancelFeeShare, MsgRegisterFeeShare, MsgUpdateFeeShare},
    traits::SharedAny,
};

pub fn create_register_feeshare_msg(
    deployer_address: impl Into<String>,
    contract_address: impl Into<String>,
    withdrawer_address: impl Into<String>,
) -> MsgRegisterFeeShare {
    MsgRegisterFeeShare {
        contract_address: contract_address.into(),
        deployer_address: deployer_address.into(),
        withdrawer_address: withdrawer_address.into(),
    }
}

pub fn create_update_feeshare_msg(
    deployer_address: impl Into<String>,
    contract_address: impl Into<String>,
    withdrawer_address: impl Into<String>,
) -> MsgUpdateFeeShare {
    MsgUpdateFeeShare {
        contract_address: contract_address.into(),
        deployer_address: deployer_address.into(),
        withdrawer_address: withdrawer_address.into(),
    }
}

pub fn create_cancel_feeshare_msg(
    deployer_address: impl Into<String>,
    contract_address: impl Into<String>,
) -> MsgCancelFeeShare {
    MsgCancelFeeShare {
        contract_address: contract_address.into(),
        deployer_address: deployer_address.into(),
    }
}

/// Messages of a transaction that is not yet signed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transaction {
    msgs: Vec<Any>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, msg: impl SharedAny) -> &mut Self {
        self.msgs.push(msg.into_any());
        self
    }

    pub fn with_message(mut self, msg: impl SharedAny) -> Self {
        self.add_message(msg);
        self
    }

    pub fn msgs(&self) -> &[Any] {
        &self.msgs
    }

    pub fn into_msgs(self) -> Vec<Any> {
        self.msgs
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }
}
