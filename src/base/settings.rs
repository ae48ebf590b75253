use super::{EigenOrdering, DEFAULT_MAX_FALLBACK_DEPTH};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of the eigen solver
///
/// # Default values
///
/// * `refine = true` -- polish the roots of the characteristic cubic with Newton iterations
/// * `verify = false` -- do not re-check `s·vᵢ = λᵢ·vᵢ` after the decomposition
/// * `max_fallback_depth = 2`
/// * `ordering = Unsorted`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Polishes the roots of the characteristic cubic with Newton iterations
    pub refine: bool,

    /// Verifies each eigenpair after the decomposition
    pub verify: bool,

    /// Maximum number of retries when every minor of the 3D eigenvector construction is degenerate
    pub max_fallback_depth: usize,

    /// Ordering of the eigenvalues and eigenvectors
    pub ordering: EigenOrdering,
}

impl Settings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Settings {
            refine: true,
            verify: false,
            max_fallback_depth: DEFAULT_MAX_FALLBACK_DEPTH,
            ordering: EigenOrdering::Unsorted,
        }
    }

    /// Enables or disables the Newton polishing of the cubic roots
    pub fn set_refine(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.refine = flag;
        Ok(self)
    }

    /// Enables or disables the verification of the eigenpairs
    pub fn set_verify(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verify = flag;
        Ok(self)
    }

    /// Sets the maximum number of fallback retries
    pub fn set_max_fallback_depth(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value > 8 {
            return Err("max_fallback_depth must be ≤ 8");
        }
        self.max_fallback_depth = value;
        Ok(self)
    }

    /// Sets the ordering of the eigenvalues
    pub fn set_ordering(&mut self, ordering: EigenOrdering) -> Result<&mut Self, StrError> {
        self.ordering = ordering;
        Ok(self)
    }

    /// Reads a JSON file containing the settings
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        let mut checked = Settings::new();
        checked
            .set_refine(settings.refine)?
            .set_verify(settings.verify)?
            .set_max_fallback_depth(settings.max_fallback_depth)?
            .set_ordering(settings.ordering)?;
        Ok(checked)
    }

    /// Writes a JSON file with the settings
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eigen solver settings\n")?;
        write!(f, "=====================\n")?;
        write!(f, "refine = {:?}\n", self.refine)?;
        write!(f, "verify = {:?}\n", self.verify)?;
        write!(f, "max_fallback_depth = {:?}\n", self.max_fallback_depth)?;
        write!(f, "ordering = {}\n", self.ordering)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
