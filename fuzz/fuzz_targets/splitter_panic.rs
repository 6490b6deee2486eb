#![no_main]
use libfuzzer_sys::fuzz_target;
use lineseam::{LineSplitter, SplitOptions};

fuzz_target!(|data: &[u8]| {
    // The splitter takes &str; lossy conversion maximizes coverage of inputs
    // that are "almost" text.
    let s = String::from_utf8_lossy(data);

    for allow_cr in [false, true] {
        for return_empty_lines in [false, true] {
            let options = SplitOptions {
                allow_cr,
                return_empty_lines,
            };
            let whole = LineSplitter::with_options(options).split(&s);

            // Char-by-char is the worst-case chunking; the result must match
            // the one-shot split exactly.
            let mut splitter = LineSplitter::with_options(options);
            let mut chunked = Vec::new();
            let mut buf = [0; 4];
            for c in s.chars() {
                chunked.extend(splitter.push(c.encode_utf8(&mut buf)));
            }
            chunked.extend(splitter.finish());

            assert_eq!(whole, chunked);
        }
    }
});
