#![no_main]

use binary_encoding::{binary_record, from_bytes, to_bytes, ByteOrder, Complex64};
use libfuzzer_sys::fuzz_target;

binary_record! {
    #[derive(Debug, Default, PartialEq)]
    struct Target {
        a: i16,
        _: [u8; 3],
        b: [u32; 4],
        c: Complex64,
        _: u64,
        d: Vec<i64>,
    }
}

fuzz_target!(|data: &[u8]| {
    // Sequence length comes from the first byte, decoded bytes from the rest
    let Some((&len, rest)) = data.split_first() else {
        return;
    };
    let order = if len & 0x80 == 0 {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };
    let mut target = Target {
        d: vec![0; usize::from(len & 0x1F)],
        ..Target::default()
    };

    if let Ok(used) = from_bytes(rest, order, &mut target) {
        // Re-encoding reproduces every non-blank byte that was consumed
        let again = to_bytes(order, &target).expect("decoded value re-encodes");
        assert_eq!(again.len(), used);
        assert_eq!(&again[..2], &rest[..2]);
        assert_eq!(&again[2..5], &[0u8; 3]);
        assert_eq!(&again[5..29], &rest[5..29]);
        assert_eq!(&again[29..37], &[0u8; 8]);
        assert_eq!(&again[37..], &rest[37..used]);
    }
});
