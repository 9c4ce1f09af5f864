
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use itertools::Itertools;
use log::{debug, info};
use crate::error::{Error, Result};

/// Weight tables compiled into the crate, keyed by `<data directory>/<file name>`.
/// They are looked up before the filesystem.
const BUNDLED_TABLES: &[(&str, &str)] = &[
    ("weights/W3D_91.dat", include_str!("../../resources/weights/W3D_91.dat")),
];

/// Largest bi-objective swarm for which weights are generated instead of loaded.
pub const MAX_GENERATED_BI_OBJECTIVE_SWARM: usize = 300;

/// Decomposition weight vectors, one per particle, in particle index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDirections {
    pub reference_directions: Vec<Vec<f64>>,
}

impl ReferenceDirections {
    /// Weight vectors for a swarm: generated for two objectives and up to
    /// [`MAX_GENERATED_BI_OBJECTIVE_SWARM`] particles, loaded from
    /// `W<M>D_<N>.dat` otherwise.
    pub fn for_swarm(number_of_objectives: usize, swarm_size: usize, data_directory: &Path) -> Result<Self> {
        if number_of_objectives == 2 && swarm_size <= MAX_GENERATED_BI_OBJECTIVE_SWARM
        {
            debug!("Generating {} uniform bi-objective weight vectors", swarm_size);

            Ok(Self::uniform_bi_objective(swarm_size))
        }
        else
        {
            Self::load(number_of_objectives, swarm_size, data_directory)
        }
    }

    /// `w[n] = (n / (N - 1), 1 - n / (N - 1))`, so both extremes are included.
    pub fn uniform_bi_objective(swarm_size: usize) -> Self {
        assert!(swarm_size >= 2, "uniform weights need at least two vectors");

        let reference_directions = (0..swarm_size)
            .map(|n| {
                let a = n as f64 / (swarm_size - 1) as f64;
                vec![a, 1.0 - a]
            })
            .collect();

        Self {
            reference_directions
        }
    }

    /// Das–Dennis simplex lattice with `n_partition` divisions per objective.
    pub fn das_dennis(dimension: usize, n_partition: usize) -> Self {
        let mut ref_dirs = vec![];

        if n_partition == 0 {
            ref_dirs.push(vec![1.0 / (dimension as f64); dimension]);
        } else {
            let mut ref_dir = vec![0.0; dimension];
            Self::das_dennis_recursion(&mut ref_dirs, &mut ref_dir, n_partition, n_partition, 0);
        }

        Self {
            reference_directions: ref_dirs,
        }
    }

    fn das_dennis_recursion(
        ref_dirs: &mut Vec<Vec<f64>>,
        ref_dir: &mut Vec<f64>,
        n_partitions: usize,
        beta: usize,
        depth: usize,
    ) {
        if depth == ref_dir.len() - 1 {
            ref_dir[depth] = beta as f64 / (n_partitions as f64);
            ref_dirs.push(ref_dir.clone());
        } else {
            for i in 0..=beta {
                ref_dir[depth] = (i as f64) / (n_partitions as f64);
                Self::das_dennis_recursion(ref_dirs, ref_dir, n_partitions, beta - i, depth + 1);
            }
        }
    }

    /// Canonical name of a weight table, e.g. `W3D_91.dat`.
    pub fn file_name(number_of_objectives: usize, swarm_size: usize) -> String {
        format!("W{}D_{}.dat", number_of_objectives, swarm_size)
    }

    /// Contents of the table compiled in under `resource`, if any.
    pub fn bundled_table(resource: &Path) -> Option<&'static str> {
        BUNDLED_TABLES
            .iter()
            .find(|(name, _)| Path::new(name) == resource)
            .map(|(_, text)| *text)
    }

    /// Look the table up among the bundled ones first, then on the filesystem.
    pub fn load(number_of_objectives: usize, swarm_size: usize, data_directory: &Path) -> Result<Self> {
        let file_name = Self::file_name(number_of_objectives, swarm_size);
        let path = data_directory.join(&file_name);

        if let Some(text) = Self::bundled_table(&path)
        {
            let directions = Self::parse(Cursor::new(text.as_bytes()), &path, number_of_objectives, swarm_size)?;

            debug!("Using {} bundled weight vectors from {}", directions.len(), path.display());

            return Ok(directions);
        }

        if path.is_file()
        {
            Self::from_file(&path, number_of_objectives, swarm_size)
        }
        else
        {
            Err(Error::WeightFileNotFound {
                file_name,
                searched: vec![path],
            })
        }
    }

    pub fn from_file(path: &Path, number_of_objectives: usize, swarm_size: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::WeightFileIo {
            path: path.to_path_buf(),
            source,
        })?;

        let directions = Self::parse(BufReader::new(file), path, number_of_objectives, swarm_size)?;

        info!("Loaded {} weight vectors from {}", directions.len(), path.display());

        Ok(directions)
    }

    /// Parse one whitespace-separated vector per line. Blank lines are skipped.
    pub fn parse<R: BufRead>(reader: R, path: &Path, number_of_objectives: usize, swarm_size: usize) -> Result<Self> {
        let malformed = |line: usize, reason: String| Error::MalformedWeightFile {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let mut ref_dirs = Vec::with_capacity(swarm_size);

        for (index, line) in reader.lines().enumerate()
        {
            let line_no = index + 1;
            let line = line.map_err(|source| Error::WeightFileIo {
                path: path.to_path_buf(),
                source,
            })?;

            if line.trim().is_empty()
            {
                continue;
            }

            let mut ref_dir = Vec::with_capacity(number_of_objectives);
            for token in line.split_whitespace()
            {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| malformed(line_no, format!("'{}' is not a number", token)))?;

                if !value.is_finite() || value < 0.0
                {
                    return Err(malformed(line_no, format!("component {} must be finite and non-negative", value)));
                }

                ref_dir.push(value);
            }

            if ref_dir.len() != number_of_objectives
            {
                return Err(malformed(
                    line_no,
                    format!("expected {} components, found {}", number_of_objectives, ref_dir.len()),
                ));
            }

            ref_dirs.push(ref_dir);
        }

        if ref_dirs.len() != swarm_size
        {
            return Err(Error::WeightCountMismatch {
                path: path.to_path_buf(),
                expected: swarm_size,
                got: ref_dirs.len(),
            });
        }

        Ok(Self {
            reference_directions: ref_dirs,
        })
    }

    /// Write the vectors to `directory` under their canonical file name and
    /// return the written path.
    pub fn save(&self, directory: &Path) -> Result<PathBuf> {
        let number_of_objectives = self.reference_directions.first().map_or(0, |w| w.len());
        let path = directory.join(Self::file_name(number_of_objectives, self.len()));

        let io_error = |source| Error::WeightFileIo {
            path: path.clone(),
            source,
        };

        let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
        for ref_dir in self.reference_directions.iter()
        {
            writeln!(writer, "{}", ref_dir.iter().join(" ")).map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;

        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.reference_directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference_directions.is_empty()
    }

    pub fn get(&self, index: usize) -> &[f64] {
        &self.reference_directions[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.reference_directions.iter().map(|w| w.as_slice())
    }
}
