use std::fs;
use std::path::Path;

use crate::core::error::{AsmError, AsmErrorKind, AsmRunError};

pub(super) fn write_binary(path: &Path, image: &[u8]) -> Result<(), AsmRunError> {
    fs::write(path, image).map_err(|err| {
        AsmRunError::new(
            AsmError::new(
                AsmErrorKind::Io,
                &format!("Error writing binary file: {err}"),
                Some(path.to_string_lossy().as_ref()),
            ),
            Vec::new(),
        )
    })
}
