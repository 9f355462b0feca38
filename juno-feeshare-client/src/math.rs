use anyhow::anyhow;
use cosmwasm_std::Uint128;

use crate::AnyResult;

pub trait IntoUint128 {
    fn as_uint128(&self) -> Uint128;
}

impl IntoUint128 for u64 {
    fn as_uint128(&self) -> Uint128 {
        Uint128::from(*self as u128)
    }
}

pub trait TryIntoU64 {
    fn try_as_u64(&self) -> AnyResult<u64>;
}

impl TryIntoU64 for Uint128 {
    fn try_as_u64(&self) -> AnyResult<u64> {
        self.u128()
            .try_into()
            .map_err(|_| anyhow!("{self} does not fit into u64"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn u64_conversions() {
        assert_eq!(7u64.as_uint128(), Uint128::new(7));
        assert_eq!(Uint128::new(42).try_as_u64().unwrap(), 42);
        assert!(Uint128::MAX.try_as_u64().is_err());
    }
}
