// Synthetic plot files for tests

use crate::core::constants::*;

pub(crate) struct PlotFileBuilder {
    bytes: Vec<u8>,
}

impl PlotFileBuilder {
    pub(crate) fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub(crate) fn header(self, unit: &[u8; 6], counters: [i32; 8]) -> Self {
        self.header_with_signature(SIGNATURE, unit, counters)
    }

    pub(crate) fn header_with_signature(
        mut self,
        signature: &[u8; SIGNATURE_SIZE],
        unit: &[u8; 6],
        counters: [i32; 8],
    ) -> Self {
        self.bytes.extend_from_slice(&[0, 0, 0, 0x0c]);
        self.bytes.extend_from_slice(signature);
        self.bytes.extend_from_slice(b"2     NEXUS 5000  1     ");
        self.bytes.extend_from_slice(unit);
        self.bytes.extend(std::iter::repeat(0u8).take(HEADER_RESERVED_SIZE as usize));
        for value in counters {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        }
        self
    }

    pub(crate) fn catalog(self, classes: &[(&[u8; 8], &[&[u8; 4]])]) -> Self {
        let counts: Vec<i32> = classes.iter().map(|(_, vars)| vars.len() as i32).collect();
        self.catalog_with_counts(classes, &counts)
    }

    pub(crate) fn catalog_with_counts(
        mut self,
        classes: &[(&[u8; 8], &[&[u8; 4]])],
        counts: &[i32],
    ) -> Self {
        self.separator();
        for (class, _) in classes {
            self.bytes.extend_from_slice(*class);
        }
        self.separator();
        for count in counts {
            self.bytes.extend_from_slice(&count.to_be_bytes());
        }
        self.separator();
        for (_, vars) in classes {
            self.bytes.extend_from_slice(b"TIME");
            for var in *vars {
                self.bytes.extend_from_slice(*var);
            }
            self.separator();
        }
        self
    }

    pub(crate) fn block(
        mut self,
        class: &[u8; 8],
        timestep: f32,
        time: f32,
        max_perfs: f32,
        items: &[(&[u8; 8], &[f32])],
    ) -> Self {
        self.bytes.extend_from_slice(class);
        self.separator();
        let num_items = items.len() as f32;
        for field in [timestep, time, num_items, num_items, max_perfs] {
            self.bytes.extend_from_slice(&field.to_bits().to_be_bytes());
        }
        for (instance, values) in items {
            self.separator();
            self.bytes.extend_from_slice(*instance);
            self.bytes.extend(std::iter::repeat(0u8).take(ITEM_RESERVED_SIZE as usize));
            for value in *values {
                self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
            }
        }
        self.separator();
        self
    }

    pub(crate) fn stop(mut self) -> Self {
        self.bytes.extend_from_slice(STOP);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.bytes
    }

    fn separator(&mut self) {
        self.bytes.extend_from_slice(&[0u8; 8]);
    }
}

/// Header counters with `num_classes` first and plausible dimensions after.
pub(crate) fn counters(num_classes: i32) -> [i32; 8] {
    [num_classes, 1, 1, 1980, 10, 10, 3, 2]
}
