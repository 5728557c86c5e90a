use crate::error::{NoiseError, Result};

// Largest width and height a raster may have
pub const RASTER_MAX_WIDTH: usize = 32767;
pub const RASTER_MAX_HEIGHT: usize = 32767;

// Rows are padded to a multiple of this many values
pub const RASTER_STRIDE_BOUNDARY: usize = 4;

// 2D grid of noise values, row-major (row y starts at y * stride).
// Out-of-range reads return the border value and out-of-range writes are ignored,
// so callers may sample or write slightly past the edges.
// The backing store only grows on resize; reclaim_mem gives the surplus back.
#[derive(Debug, Clone, Default)]
pub struct NoiseMap {
    width: usize,
    height: usize,
    stride: usize,
    values: Vec<f32>,
    border_value: f32,
}

// Row length after padding
fn calc_stride(width: usize) -> usize {
    width.div_ceil(RASTER_STRIDE_BOUNDARY) * RASTER_STRIDE_BOUNDARY
}

fn calc_min_mem_usage(width: usize, height: usize) -> usize {
    calc_stride(width) * height
}

// Zero-filled store of `len` values, reporting allocation failure instead of aborting
fn allocate(len: usize) -> Result<Vec<f32>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| NoiseError::OutOfMemory(len))?;
    values.resize(len, 0.0);
    Ok(values)
}

impl NoiseMap {
    // Empty map, no storage allocated
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        let mut map = Self::new();
        map.set_size(width, height)?;
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    // Number of values the backing store holds (>= stride * height)
    pub fn memory_used(&self) -> usize {
        self.values.len()
    }

    pub fn border_value(&self) -> f32 {
        self.border_value
    }

    pub fn set_border_value(&mut self, border_value: f32) {
        self.border_value = border_value;
    }

    // Resizes the map. Contents are unspecified afterwards.
    // The store is reused when it is already big enough, otherwise replaced.
    // A zero width or height frees the store.
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<()> {
        if width > RASTER_MAX_WIDTH || height > RASTER_MAX_HEIGHT {
            return Err(NoiseError::InvalidParam(format!(
                "noise map size {width}x{height} exceeds {RASTER_MAX_WIDTH}x{RASTER_MAX_HEIGHT}"
            )));
        }
        if width == 0 || height == 0 {
            self.delete_and_reset();
            return Ok(());
        }

        let needed = calc_min_mem_usage(width, height);
        if self.values.len() < needed {
            log::trace!(
                "noise map: reallocating {} -> {} values for {}x{}",
                self.values.len(),
                needed,
                width,
                height
            );
            // Free the old store before asking for the new one
            self.delete_and_reset();
            self.values = allocate(needed)?;
        } else {
            log::trace!(
                "noise map: reusing {} values for {}x{}",
                self.values.len(),
                width,
                height
            );
        }
        self.stride = calc_stride(width);
        self.width = width;
        self.height = height;
        Ok(())
    }

    // Value at (x, y), or the border value outside the map
    pub fn get_value(&self, x: i32, y: i32) -> f32 {
        match self.index(x, y) {
            Some(i) => self.values[i],
            None => self.border_value,
        }
    }

    // Writes (x, y); silently ignored outside the map
    pub fn set_value(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.index(x, y) {
            self.values[i] = value;
        }
    }

    // Sets every cell inside the map to `value`
    pub fn clear(&mut self, value: f32) {
        for row in 0..self.height {
            if let Some(slab) = self.slab_mut(row) {
                slab.fill(value);
            }
        }
    }

    // Row `row` without the stride padding
    pub fn slab(&self, row: usize) -> Option<&[f32]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.stride;
        Some(&self.values[start..start + self.width])
    }

    pub fn slab_mut(&mut self, row: usize) -> Option<&mut [f32]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.stride;
        Some(&mut self.values[start..start + self.width])
    }

    // All cells in row-major order, padding skipped
    pub fn iter_values(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.height).flat_map(move |row| self.slab(row).unwrap_or(&[]).iter().copied())
    }

    // Shrinks the store to exactly what the current size needs.
    // Contents are kept.
    pub fn reclaim_mem(&mut self) -> Result<()> {
        let needed = calc_min_mem_usage(self.width, self.height);
        if self.values.len() > needed {
            log::trace!(
                "noise map: reclaiming {} -> {} values",
                self.values.len(),
                needed
            );
            let mut values = allocate(needed)?;
            values.copy_from_slice(&self.values[..needed]);
            self.values = values;
        }
        Ok(())
    }

    // Moves the store of `source` into this map without copying values.
    // `source` is left empty. The border value of this map is kept.
    pub fn take_ownership(&mut self, source: &mut NoiseMap) {
        self.values = std::mem::take(&mut source.values);
        self.width = source.width;
        self.height = source.height;
        self.stride = source.stride;
        source.delete_and_reset();
    }

    // Deep copy of `source`, reusing this map's store when possible
    pub fn copy_from(&mut self, source: &NoiseMap) -> Result<()> {
        self.set_size(source.width, source.height)?;
        for row in 0..source.height {
            if let (Some(dest), Some(src)) = (self.slab_mut(row), source.slab(row)) {
                dest.copy_from_slice(src);
            }
        }
        self.border_value = source.border_value;
        Ok(())
    }

    fn delete_and_reset(&mut self) {
        self.values = Vec::new();
        self.width = 0;
        self.height = 0;
        self.stride = 0;
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.stride + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_empty_and_returns_border() {
        let mut map = NoiseMap::new();
        assert_eq!((map.width(), map.height(), map.memory_used()), (0, 0, 0));
        map.set_border_value(-2.0);
        assert_eq!(map.get_value(0, 0), -2.0);
        // Writing to an unallocated map is a no-op
        map.set_value(0, 0, 1.0);
        assert_eq!(map.get_value(0, 0), -2.0);
    }

    #[test]
    fn stride_is_padded_but_cells_are_contiguous_per_row() {
        let map = NoiseMap::with_size(5, 3).unwrap();
        assert_eq!(map.stride(), 8);
        assert_eq!(map.memory_used(), 24);
        assert_eq!(map.slab(0).unwrap().len(), 5);
        assert!(map.slab(3).is_none());
        assert_eq!(map.iter_values().count(), 15);
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut map = NoiseMap::with_size(4, 4).unwrap();
        map.set_border_value(9.0);
        map.set_value(3, 2, 0.5);
        assert_eq!(map.get_value(3, 2), 0.5);
        for &(x, y) in &[(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX)] {
            map.set_value(x, y, 7.0);
            assert_eq!(map.get_value(x, y), 9.0);
        }
        assert!(map.iter_values().all(|v| v != 7.0));
    }

    #[test]
    fn resize_reuses_store_when_shrinking_and_regrowing() {
        let mut map = NoiseMap::with_size(100, 100).unwrap();
        let ptr = map.slab(0).unwrap().as_ptr();
        let capacity = map.memory_used();

        map.set_size(10, 10).unwrap();
        assert_eq!(map.memory_used(), capacity);
        map.set_size(100, 100).unwrap();
        assert_eq!(map.memory_used(), capacity);
        assert_eq!(map.slab(0).unwrap().as_ptr(), ptr);
    }

    #[test]
    fn reclaim_mem_shrinks_to_fit_and_keeps_values() {
        let mut map = NoiseMap::with_size(64, 64).unwrap();
        map.set_size(6, 2).unwrap();
        map.clear(0.25);
        map.set_value(5, 1, -1.0);
        map.reclaim_mem().unwrap();
        assert_eq!(map.memory_used(), 16);
        assert_eq!(map.get_value(0, 0), 0.25);
        assert_eq!(map.get_value(5, 1), -1.0);
    }

    #[test]
    fn zero_size_frees_and_oversize_is_rejected() {
        let mut map = NoiseMap::with_size(8, 8).unwrap();
        map.set_size(0, 8).unwrap();
        assert_eq!(map.memory_used(), 0);
        let err = map.set_size(RASTER_MAX_WIDTH + 1, 1).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidParam(_)));
        assert!(NoiseMap::with_size(RASTER_MAX_WIDTH, 1).is_ok());
    }

    #[test]
    fn take_ownership_moves_without_copying() {
        let mut source = NoiseMap::with_size(16, 16).unwrap();
        source.set_value(1, 1, 3.0);
        let ptr = source.slab(0).unwrap().as_ptr();

        let mut dest = NoiseMap::new();
        dest.take_ownership(&mut source);
        assert_eq!(dest.get_value(1, 1), 3.0);
        assert_eq!(dest.slab(0).unwrap().as_ptr(), ptr);
        assert_eq!((source.width(), source.height(), source.memory_used()), (0, 0, 0));
    }

    #[test]
    fn clone_and_copy_are_deep() {
        let mut a = NoiseMap::with_size(3, 3).unwrap();
        a.clear(1.0);
        a.set_border_value(-5.0);
        let b = a.clone();
        let mut c = NoiseMap::new();
        c.copy_from(&a).unwrap();
        a.set_value(0, 0, 0.0);
        assert_eq!(b.get_value(0, 0), 1.0);
        assert_eq!(c.get_value(0, 0), 1.0);
        assert_eq!(c.border_value(), -5.0);
        assert_eq!(c.get_value(-1, -1), -5.0);
    }
}
