use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::decompose(i as u64, 1));
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::decompose(i as u64, -1));
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(POS_CACHE[0].digits(), &[0]);
    assert_eq!(POS_CACHE[0].signum(), 1);
    // zero never carries a negative sign, even from the negative table
    assert_eq!(NEG_CACHE[0], POS_CACHE[0]);
    assert_eq!(POS_CACHE[16].digits(), &[6, 1]);
    assert_eq!(NEG_CACHE[16].signum(), -1);
    assert_eq!(NEG_CACHE[10].to_string(), "-10");
}
