//! Toroidal tile export.
//!
//! Once optimisation finishes, the final point set is baked into a static
//! lookup table consumed by a downstream renderer: a C header declaring a
//! constant 4-dimensional `float` array shaped
//! `[frames][tile_size][tile_size * spp * dim]` plus an accessor
//! `sample(f, i, j, s, d)` that reduces every index modulo its extent.
//! The modulo contract gives toroidal tiling semantics — arbitrary integer
//! coordinates always land on a valid sample — and downstream consumers
//! rely on it for infinite tiling, so both the array layout and the
//! accessor expression are preserved exactly.
//!
//! Unlike the historical emitter, which silently skipped the write when the
//! output file could not be opened, every I/O failure here surfaces as an
//! [`ExportError`].

use slicer_core::types::VecN;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Tile export errors.
///
/// # Variants
/// - `InvalidConfig`: a tile parameter was zero
/// - `PointCountMismatch`: point count does not fill the tile exactly
/// - `DimensionMismatch`: points of unequal dimension
/// - `Io`: file creation or write failure
#[derive(Error, Debug)]
pub enum ExportError {
    /// A tile parameter was zero.
    #[error("Invalid tile parameter '{name}': must be > 0")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
    },

    /// Point count does not match `tile_size * tile_size * spp`.
    #[error("Point count mismatch: got {got}, tile needs exactly {need}")]
    PointCountMismatch {
        /// Number of points provided.
        got: usize,
        /// Number of points the tile requires.
        need: usize,
    },

    /// A point's dimension differs from the first point's.
    #[error("Point {index} has dimension {got}, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Its dimension.
        got: usize,
        /// Dimension of the first point.
        expected: usize,
    },

    /// File creation or write failure.
    #[error("Tile export I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// Validated tile geometry: spatial extent, samples per pixel, frame count.
///
/// # Examples
///
/// ```
/// use slicer_sampling::export::TileConfig;
///
/// let config = TileConfig::new(4, 2, 1).unwrap();
/// assert_eq!(config.points_required(), 32);
///
/// assert!(TileConfig::new(0, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    tile_size: usize,
    spp: usize,
    frames: usize,
}

impl TileConfig {
    /// Create a configuration; every extent must be positive.
    pub fn new(tile_size: usize, spp: usize, frames: usize) -> Result<Self, ExportError> {
        if tile_size == 0 {
            return Err(ExportError::InvalidConfig { name: "tile_size" });
        }
        if spp == 0 {
            return Err(ExportError::InvalidConfig { name: "spp" });
        }
        if frames == 0 {
            return Err(ExportError::InvalidConfig { name: "frames" });
        }
        Ok(Self {
            tile_size,
            spp,
            frames,
        })
    }

    /// Spatial tile extent (pixels per side).
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Samples per pixel.
    #[inline]
    pub fn spp(&self) -> usize {
        self.spp
    }

    /// Number of frames.
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of points needed to fill one tile:
    /// `tile_size * tile_size * spp`.
    #[inline]
    pub fn points_required(&self) -> usize {
        self.tile_size * self.tile_size * self.spp
    }
}

/// A baked sample tile with toroidal index semantics.
///
/// Built from a finished point set, queryable in-process through
/// [`Tile::sample`], and serialisable to the C header artifact through
/// [`Tile::export_to`].
///
/// # Examples
///
/// ```
/// use slicer_core::types::VecN;
/// use slicer_sampling::export::{Tile, TileConfig};
///
/// let config = TileConfig::new(2, 1, 1).unwrap();
/// let points: Vec<_> = (0..4)
///     .map(|i| VecN::from_vec(vec![i as f64 / 4.0, 0.5]))
///     .collect();
/// let tile = Tile::from_points(&points, config).unwrap();
///
/// // Indices wrap: row 0 and row 2 are the same pixel row
/// assert_eq!(tile.sample(0, 0, 1, 0, 0), tile.sample(0, 2, 1, 0, 0));
/// ```
pub struct Tile {
    config: TileConfig,
    dim: usize,
    /// Flattened `[frames][tile_size][tile_size * spp * dim]` data.
    data: Vec<f64>,
}

impl Tile {
    /// Bake a point set into a tile.
    ///
    /// Requires exactly [`TileConfig::points_required`] points of equal
    /// dimension. Point `(i * tile_size + j) * spp + s` supplies the `s`-th
    /// sample of pixel `(i, j)`; every frame carries the same point data.
    pub fn from_points(points: &[VecN<f64>], config: TileConfig) -> Result<Self, ExportError> {
        let need = config.points_required();
        if points.len() != need {
            return Err(ExportError::PointCountMismatch {
                got: points.len(),
                need,
            });
        }

        let dim = points[0].dim();
        for (index, p) in points.iter().enumerate() {
            if p.dim() != dim {
                return Err(ExportError::DimensionMismatch {
                    index,
                    got: p.dim(),
                    expected: dim,
                });
            }
        }

        let t = config.tile_size();
        let spp = config.spp();
        let row_len = t * spp * dim;
        let mut data = Vec::with_capacity(config.frames() * t * row_len);
        for _f in 0..config.frames() {
            for i in 0..t {
                for j in 0..t {
                    for s in 0..spp {
                        let point = &points[(i * t + j) * spp + s];
                        for d in 0..dim {
                            data.push(point[d]);
                        }
                    }
                }
            }
        }

        Ok(Self { config, dim, data })
    }

    /// Point dimension (components per sample).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Tile geometry.
    #[inline]
    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Look up one sample component with toroidal index wraparound.
    ///
    /// Every index is reduced by Euclidean modulo against its extent, so
    /// arbitrary (including negative) integer coordinates are valid:
    /// `tile[f mod frames][i mod tile_size]
    /// [(j mod tile_size) * spp * dim + (s mod spp) * dim + (d mod dim)]`.
    pub fn sample(&self, f: i64, i: i64, j: i64, s: i64, d: i64) -> f64 {
        let t = self.config.tile_size();
        let fm = f.rem_euclid(self.config.frames() as i64) as usize;
        let im = i.rem_euclid(t as i64) as usize;
        let jm = j.rem_euclid(t as i64) as usize;
        let sm = s.rem_euclid(self.config.spp() as i64) as usize;
        let dm = d.rem_euclid(self.dim as i64) as usize;

        let row_len = t * self.config.spp() * self.dim;
        self.data[(fm * t + im) * row_len + (jm * self.config.spp() + sm) * self.dim + dm]
    }

    /// Serialise the tile as a C header: the constant array literal in
    /// `(frame, row, column, sample, component)` row-major order followed
    /// by the modulo-indexing `sample` accessor.
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let t = self.config.tile_size();
        let spp = self.config.spp();
        let frames = self.config.frames();
        let row_len = t * spp * self.dim;

        write!(out, "#pragma once\n\n\n")?;
        write!(out, "const float tile[{}][{}][{}] = {{", frames, t, row_len)?;
        for f in 0..frames {
            if f == 0 {
                write!(out, "{{")?;
            } else {
                write!(out, ",{{")?;
            }
            for i in 0..t {
                if i == 0 {
                    write!(out, "{{")?;
                } else {
                    write!(out, ",{{")?;
                }
                for idx in 0..row_len {
                    let value = self.data[(f * t + i) * row_len + idx];
                    if idx == 0 {
                        write!(out, "{}", value)?;
                    } else {
                        write!(out, ",{}", value)?;
                    }
                }
                write!(out, "}}")?;
            }
            write!(out, "}}")?;
        }
        write!(out, "}};")?;
        write!(out, "\n\n\n")?;
        write!(out, "float sample(int f,int i, int j, int s, int d){{\n")?;
        write!(
            out,
            "\treturn tile[f%{}][i%{}][(j%{})*{}*{}+(s%{})*{}+(d%{})];\n",
            frames, t, t, spp, self.dim, spp, self.dim, self.dim
        )?;
        write!(out, "}}\n")?;
        Ok(())
    }

    /// Write the header artifact to `path`, creating or truncating the
    /// file. I/O failures are reported, never swallowed.
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_header(&mut writer)?;
        writer.flush()?;
        tracing::debug!(
            path = %path.display(),
            frames = self.config.frames(),
            tile_size = self.config.tile_size(),
            "wrote tile header"
        );
        Ok(())
    }
}
