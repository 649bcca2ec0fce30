#![no_main]

use endianbuf::{Buffer, ByteOrder};
use libfuzzer_sys::fuzz_target;

// Each input byte selects an operation; the byte after it is its argument.
fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };
    let order = if first & 1 == 0 {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };
    let mut buffer = Buffer::new(order);

    for pair in ops.chunks(2) {
        let arg = pair.get(1).copied().unwrap_or(0);
        let size = buffer.size();
        let position = buffer.position();
        let before = buffer.export();

        let read = match pair[0] % 12 {
            0 => {
                buffer.write_u8(arg);
                None
            }
            1 => {
                buffer.write_i16(i16::from(arg as i8) * 257);
                None
            }
            2 => {
                buffer.write_u32(u32::from(arg) << 24 | u32::from(arg));
                None
            }
            3 => {
                buffer.write_i64(-i64::from(arg));
                None
            }
            4 => {
                buffer.write_fixed_string(&ops[..usize::from(arg).min(ops.len())], usize::from(arg % 16));
                None
            }
            5 => {
                buffer.seek(usize::from(arg));
                None
            }
            6 => Some(buffer.read_u16().map(|_| ())),
            7 => Some(buffer.read_i32().map(|_| ())),
            8 => Some(buffer.read_u64().map(|_| ())),
            9 => Some(buffer.read_fixed_string(usize::from(arg % 16)).map(|_| ())),
            10 => {
                buffer.rewind();
                None
            }
            _ => {
                buffer.clear();
                None
            }
        };

        match read {
            Some(Ok(())) => assert!(buffer.position() <= buffer.size()),
            Some(Err(_)) => {
                assert_eq!(buffer.position(), position);
                assert_eq!(buffer.export(), before);
            }
            None => assert!(buffer.size() >= size || buffer.is_empty()),
        }
    }
});
