#![no_main]

use libfuzzer_sys::fuzz_target;
use rasterfuzz_reader::ByteCursor;

// Fuzz target: ByteCursor typed reads over arbitrary input.
//
// Catches bugs in:
// - Offset accounting across mixed-width reads
// - Truncation detection at every buffer boundary
// - rest()/remaining() consistency with the read position

fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);

    // Drive the cursor with its own input: each leading byte picks the
    // width of the next read, until any read runs off the end.
    loop {
        let Ok(op) = cursor.read_u8() else { break };
        let ok = match op % 4 {
            0 => cursor.read_u8().is_ok(),
            1 => cursor.read_u16().is_ok(),
            2 => cursor.read_u32().is_ok(),
            _ => cursor.read_i32().is_ok(),
        };

        assert_eq!(cursor.position() + cursor.remaining(), data.len());
        assert_eq!(cursor.rest().len(), cursor.remaining());

        if !ok {
            break;
        }
    }
});
