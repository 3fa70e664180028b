// Nexus plot decoder: header, variable catalog, data blocks

use crate::core::compression::open_stream;
use crate::core::constants::*;
use crate::core::error::{NexError, Result};
use crate::core::format::*;
use crate::core::stream::{interpret_float, PlotStream};
use crate::core::unit_system::UnitSystem;
use crate::models::reader_config::{ReaderConfig, UnknownClassPolicy};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Decode a plot file with the default configuration.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Plot> {
    NexReader::default().load_file(path)
}

/// Decode a plot from any reader with the default configuration.
pub fn load<R: Read>(reader: R) -> Result<Plot> {
    NexReader::default().load(reader)
}

#[derive(Debug, Clone, Default)]
pub struct NexReader {
    config: ReaderConfig,
}

impl NexReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Plot> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NexError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Reading plot file {}", path.display());
        self.load(file)
    }

    /// Decode one plot from `reader`, buffered with `buffer_capacity`.
    ///
    /// The internal buffer may read past the STOP sentinel, so a caller
    /// that keeps using a `&mut R` afterwards will find it advanced by up to
    /// `buffer_capacity` extra bytes. Use [`NexReader::load_buffered`] to
    /// stop right after the sentinel.
    pub fn load<R: Read>(&self, reader: R) -> Result<Plot> {
        let buffered = BufReader::with_capacity(self.config.buffer_capacity.max(1), reader);
        self.load_buffered(buffered)
    }

    /// Decode one plot from a reader that is already buffered. For
    /// uncompressed input nothing past the STOP sentinel is consumed.
    /// The reader is dropped before returning, on success and on every
    /// error.
    pub fn load_buffered<R: BufRead>(&self, reader: R) -> Result<Plot> {
        let mut stream = PlotStream::new(open_stream(reader, self.config.compression)?);

        let header = Self::read_header(&mut stream)?;
        let catalog = Self::read_catalog(&mut stream, header.num_classes)?;
        let records = self.read_blocks(&mut stream, &catalog)?;

        info!(
            "Decoded plot: {} classes, {} records, {} bytes",
            catalog.len(),
            records.len(),
            stream.offset()
        );

        Ok(Plot {
            header,
            catalog,
            records,
        })
    }

    pub fn read_header<R: Read>(stream: &mut PlotStream<R>) -> Result<Header> {
        stream.skip(HEADER_LEAD_SIZE, "header lead")?;

        let signature = stream.read_bytes::<SIGNATURE_SIZE>("file signature")?;
        if &signature != SIGNATURE {
            return Err(NexError::bad_header("Could not verify file type"));
        }

        // plot file version, simulator name, two simulator version fields
        stream.skip(HEADER_VERSION_BLOB_SIZE, "simulator version block")?;
        let unit_code = stream.read_bytes::<UNIT_SYSTEM_SIZE>("unit system")?;
        let unit_system = UnitSystem::from_code(&unit_code)?;

        stream.skip(HEADER_RESERVED_SIZE, "header reserved block")?;

        let counters = stream.read_i32_array::<HEADER_COUNTERS>("header counters")?;
        if counters.iter().any(|&x| x < 0) {
            return Err(NexError::bad_header("Negative value, corrupted file"));
        }
        let [num_classes, day, month, year, nx, ny, nz, ncomp] = counters.map(|x| x as u32);

        let header = Header {
            unit_system,
            num_classes,
            day,
            month,
            year,
            nx,
            ny,
            nz,
            ncomp,
        };
        debug!("Plot header: {:?}", header);

        Ok(header)
    }

    pub fn read_catalog<R: Read>(
        stream: &mut PlotStream<R>,
        num_classes: u32,
    ) -> Result<VariableCatalog> {
        let num_classes = num_classes as usize;

        stream.skip(CATALOG_SEPARATOR_SIZE, "catalog separator")?;
        let class_names =
            stream.read_str_vec::<CLASS_NAME_SIZE>(num_classes, "catalog class names")?;

        stream.skip(CATALOG_SEPARATOR_SIZE, "catalog separator")?;
        let vars_in_class = stream.read_i32_vec(num_classes, "catalog variable counts")?;
        if vars_in_class.iter().any(|&x| x < 0) {
            return Err(NexError::bad_header("Negative value, corrupted file"));
        }

        stream.skip(CATALOG_SEPARATOR_SIZE, "catalog separator")?;

        let mut catalog = VariableCatalog::new();
        for (class_name, &count) in class_names.iter().zip(vars_in_class.iter()) {
            stream.skip(TIME_VARNAME_SIZE, "time variable name")?;
            let varnames =
                stream.read_str_vec::<VAR_NAME_SIZE>(count as usize, "class variable names")?;
            stream.skip(CLASS_TRAILER_SIZE, "class trailer")?;

            debug!(
                "Catalog class {}: {} variables",
                class_name.trimmed(),
                varnames.len()
            );
            catalog.insert(*class_name, varnames);
        }

        Ok(catalog)
    }

    pub fn read_blocks<R: Read>(
        &self,
        stream: &mut PlotStream<R>,
        catalog: &VariableCatalog,
    ) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut unknown_classes: HashSet<ClassName> = HashSet::new();

        loop {
            let class_name = stream.read_str::<CLASS_NAME_SIZE>("block class name")?;
            if class_name == *STOP {
                return Ok(records);
            }

            stream.skip(BLOCK_PREFIX_SIZE, "block prefix")?;

            // [timestep, time, num_items, max_items, max_perfs], all floats;
            // max_items is positional only.
            let fields = stream.read_i32_array::<BLOCK_FIELDS>("block fields")?;
            let timestep = interpret_float(fields[0]) as i32;
            let time = interpret_float(fields[1]);
            let num_items = interpret_float(fields[2]) as i32;
            let max_perfs = interpret_float(fields[4]) as i32;

            let varnames: &[VarName] = match catalog.get(&class_name) {
                Some(varnames) => varnames,
                None => match self.config.unknown_class {
                    UnknownClassPolicy::Error => {
                        return Err(NexError::UnknownClass(class_name.to_string()));
                    }
                    UnknownClassPolicy::Empty => {
                        if unknown_classes.insert(class_name) {
                            warn!(
                                "Class {:?} is not in the variable catalog, its blocks yield no records",
                                class_name
                            );
                        }
                        &[]
                    }
                },
            };

            trace!(
                "Block {} class={} time={} items={}",
                timestep,
                class_name.trimmed(),
                time,
                num_items
            );

            for _ in 0..num_items {
                stream.skip(ITEM_PREFIX_SIZE, "item prefix")?;
                let instance_name = stream.read_str::<INSTANCE_NAME_SIZE>("instance name")?;
                stream.skip(ITEM_RESERVED_SIZE, "item reserved block")?;

                let values = stream.read_i32_vec(varnames.len(), "item values")?;
                records.extend(varnames.iter().zip(values).map(|(var_name, raw)| Record {
                    timestep,
                    time,
                    max_perfs,
                    class_name,
                    instance_name,
                    var_name: *var_name,
                    value: interpret_float(raw),
                }));
            }

            stream.skip(BLOCK_TRAILER_SIZE, "block trailer")?;
        }
    }
}
