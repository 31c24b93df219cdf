//! Solidity storage-slot addressing for the staking contract.
//!
//! Three addressing rules cover every variable the predeploy touches:
//! scalars live at their declared slot, `mapping(address => T)` entries at
//! `keccak256(pad32(key) ++ pad32(slot))`, and dynamic-array elements at
//! `keccak256(pad32(slot)) + index` (with the length word at the slot
//! itself).

use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the base slot for a Solidity dynamic array's data.
///
/// For `address[] public _validators` at slot 0:
///   base = keccak256(abi.encode(0))
///   _validators[0] lives at base + 0
///   _validators[1] lives at base + 1
///   etc.
pub fn dynamic_array_base_slot(array_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(B256::from(array_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Compute the storage key of element `index` of a dynamic array at
/// `array_slot`. The offset add wraps, keeping the function total.
pub fn array_element_slot(array_slot: U256, index: u64) -> B256 {
    let slot = dynamic_array_base_slot(array_slot).wrapping_add(U256::from(index));
    B256::from(slot.to_be_bytes())
}

/// Compute the storage slot for a Solidity `mapping(address => T)` entry.
///
/// For `_addressToIsValidator[addr]` at mapping slot 1:
///   slot = keccak256(abi.encode(addr, 1))
pub fn mapping_address_slot(key: Address, mapping_slot: U256) -> B256 {
    let mut hasher = Keccak256::new();
    let mut key_padded = [0u8; 32];
    key_padded[12..32].copy_from_slice(key.as_slice());
    hasher.update(key_padded);
    hasher.update(B256::from(mapping_slot.to_be_bytes()).as_slice());
    hasher.finalize()
}

/// Storage key of a scalar variable: the slot number itself, widened to a
/// 32-byte big-endian word. A dynamic array's length word lives at the same
/// key as its declared slot.
pub fn scalar_slot_key(slot: U256) -> B256 {
    B256::from(slot.to_be_bytes())
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Decode a u64 from a B256 storage value.
pub fn decode_u64(value: B256) -> u64 {
    U256::from_be_bytes(value.0).as_limbs()[0]
}

/// Decode a bool from a B256 storage value.
pub fn decode_bool(value: B256) -> bool {
    value[31] != 0
}

/// Encode a u64 value into a B256 storage value.
pub fn encode_u64(value: u64) -> B256 {
    B256::from(U256::from(value).to_be_bytes())
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_array_base_slot_known_vectors() {
        // keccak256 of a zeroed 32-byte word (slot 0 array base)
        assert_eq!(
            B256::from(dynamic_array_base_slot(U256::ZERO).to_be_bytes()),
            b256!("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"),
        );
        // keccak256 of uint256(1) (slot 1 array base)
        assert_eq!(
            B256::from(dynamic_array_base_slot(U256::from(1u64)).to_be_bytes()),
            b256!("b10e2d527612073b26eecdfd717e6a320cf44b4afac2b0732d9fcbe2b7fa0cf6"),
        );
    }

    #[test]
    fn test_array_elements_are_consecutive() {
        let slot = U256::ZERO;
        let base = dynamic_array_base_slot(slot);
        for i in 0..5u64 {
            assert_eq!(
                array_element_slot(slot, i),
                B256::from(base.wrapping_add(U256::from(i)).to_be_bytes()),
            );
        }
    }

    #[test]
    fn test_array_element_slots_distinct() {
        let keys: Vec<B256> = (0..10u64).map(|i| array_element_slot(U256::ZERO, i)).collect();
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_mapping_slot_deterministic() {
        let addr = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let slot = U256::from(2u64);
        assert_eq!(mapping_address_slot(addr, slot), mapping_address_slot(addr, slot));
    }

    #[test]
    fn test_mapping_slot_distinct_over_inputs() {
        let a = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let b = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

        // Different address, same slot
        assert_ne!(
            mapping_address_slot(a, U256::from(1u64)),
            mapping_address_slot(b, U256::from(1u64)),
        );
        // Same address, different slot
        assert_ne!(
            mapping_address_slot(a, U256::from(1u64)),
            mapping_address_slot(a, U256::from(2u64)),
        );
    }

    #[test]
    fn test_scalar_slot_key_is_right_aligned() {
        assert_eq!(
            scalar_slot_key(U256::from(5u64)),
            b256!("0000000000000000000000000000000000000000000000000000000000000005"),
        );
        assert_eq!(scalar_slot_key(U256::ZERO), B256::ZERO);
    }

    #[test]
    fn test_encode_decode_round_trips() {
        let addr = address!("15d34AAf54267DB7D7c367839AAf71A00a2C6A65");
        assert_eq!(decode_address(encode_address(addr)), addr);
        assert_eq!(decode_u64(encode_u64(42)), 42);
        assert!(decode_bool(encode_u64(1)));
        assert!(!decode_bool(encode_u64(0)));
    }
}
