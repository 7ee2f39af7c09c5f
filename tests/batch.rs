//! NG's 4-way batch is element-wise equivalent to four scalar `oneshot`
//! calls, for any four equal-length inputs.

use harmonia::ng::batch::batch4;
use harmonia::ng::oneshot;
use harmonia::primitives::Digest;
use harmonia::error::Error;

use proptest::prelude::*;

proptest! {
    #[test]
    fn batch4_matches_four_scalar_oneshots(
        msgs in proptest::collection::vec(any::<u8>(), 0..300)
            .prop_flat_map(|base| {
                let len = base.len();
                (
                    Just(base),
                    proptest::collection::vec(any::<u8>(), len),
                    proptest::collection::vec(any::<u8>(), len),
                    proptest::collection::vec(any::<u8>(), len),
                )
            })
    ) {
        let (a, b, c, d) = msgs;
        let batched = batch4([&a, &b, &c, &d]).unwrap();
        let expected = [
            Digest::new(oneshot(&a)),
            Digest::new(oneshot(&b)),
            Digest::new(oneshot(&c)),
            Digest::new(oneshot(&d)),
        ];
        prop_assert_eq!(batched, expected);
    }
}

#[test]
fn batch4_rejects_unequal_length_inputs_without_computing_anything() {
    let result = batch4([&b"abc"[..], &b"ab\0"[..], &b"abcd"[..], &b"abc"[..]]);
    assert_eq!(result, Err(Error::LengthMismatch([3, 3, 4, 3])));
}
