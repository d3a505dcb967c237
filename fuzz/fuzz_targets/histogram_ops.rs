#![no_main]
use forest_entropy::WeightedEntropyHistogram;
use libfuzzer_sys::fuzz_target;

// First byte picks the bin count, every following byte is one operation:
// the top two bits select add/sub/resize, the low six bits the bin.
fuzz_target!(|data: &[u8]| {
    let Some((&bins, ops)) = data.split_first() else {
        return;
    };
    let mut hist = WeightedEntropyHistogram::new(usize::from(bins % 32));

    for &op in ops {
        let bin = usize::from(op & 0x3F);
        let before = (hist.mass(), hist.weighted_entropy());
        let result = match op >> 6 {
            0 | 1 => hist.add_one(bin),
            2 => hist.sub_one(bin),
            _ => hist.resize(bin % 32),
        };
        if result.is_err() {
            assert_eq!(before, (hist.mass(), hist.weighted_entropy()));
        }

        assert_eq!(hist.mass(), hist.counts().iter().sum::<usize>());
        let drift = (hist.weighted_entropy() - hist.recomputed_weighted_entropy()).abs();
        let scale = 1.0 + hist.mass() as f64;
        assert!(drift <= 1e-9 * scale * scale);
    }
});
