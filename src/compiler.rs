//! Pipeline entry: read a definition file, parse and resolve it, emit Rust source,
//! then write it out (or hand it back for a dry run).

use crate::config::{ConfigError, GenConfig};
use crate::emit::{EmitError, Emitter};
use crate::parser::{self, ParseError};
use crate::resolve::{BuiltinTable, Resolver};
use crate::spec::{MsgSpec, SrvSpec};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which kind of definition a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Msg,
    Srv,
}

impl DefinitionKind {
    /// `msgs` or `srvs`.
    pub fn default_package(self) -> &'static str {
        match self {
            DefinitionKind::Msg => "msgs",
            DefinitionKind::Srv => "srvs",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Msg => "msg",
            DefinitionKind::Srv => "srv",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefinitionKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msg" => Ok(DefinitionKind::Msg),
            "srv" => Ok(DefinitionKind::Srv),
            other => Err(GenError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("unrecognized generator: {0} (expected msg or srv)")]
    UnknownKind(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot derive a definition name from {0}")]
    Name(PathBuf),
    #[error("failed to parse spec: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to generate source: {0}")]
    Emit(#[from] EmitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One file to compile.
#[derive(Debug, Clone)]
pub struct CompileJob {
    pub kind: DefinitionKind,
    pub input: PathBuf,
    /// Defaults to the input path with `.rs` appended.
    pub output: Option<PathBuf>,
    /// Defaults to [`DefinitionKind::default_package`].
    pub package: Option<String>,
    pub dry_run: bool,
}

impl CompileJob {
    pub fn new(kind: DefinitionKind, input: impl Into<PathBuf>) -> Self {
        CompileJob {
            kind,
            input: input.into(),
            output: None,
            package: None,
            dry_run: false,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut os = self.input.clone().into_os_string();
                os.push(".rs");
                PathBuf::from(os)
            }
        }
    }

    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or_else(|| self.kind.default_package())
    }
}

#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub path: PathBuf,
    pub code: String,
    /// False for dry runs.
    pub written: bool,
}

/// Generator with its configuration and builtin table loaded once.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: GenConfig,
    builtins: BuiltinTable,
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(GenConfig::default())
    }
}

impl Compiler {
    pub fn new(config: GenConfig) -> Self {
        Compiler {
            config,
            builtins: BuiltinTable::standard(),
        }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn parse_msg(&self, package: &str, name: &str, data: &[u8]) -> Result<MsgSpec, ParseError> {
        let resolver = Resolver::new(&self.builtins, &self.config, package);
        parser::parse_msg_spec(&resolver, name, data)
    }

    pub fn parse_srv(&self, package: &str, name: &str, data: &[u8]) -> Result<SrvSpec, ParseError> {
        let resolver = Resolver::new(&self.builtins, &self.config, package);
        parser::parse_srv_spec(&resolver, name, data)
    }

    /// Parse and emit one definition held in memory.
    pub fn generate(
        &self,
        kind: DefinitionKind,
        package: &str,
        name: &str,
        source_file: &str,
        data: &[u8],
    ) -> Result<String, GenError> {
        let emitter = Emitter::new(&self.config);
        let code = match kind {
            DefinitionKind::Msg => emitter.emit_msg(&self.parse_msg(package, name, data)?, source_file)?,
            DefinitionKind::Srv => emitter.emit_srv(&self.parse_srv(package, name, data)?, source_file)?,
        };
        tracing::debug!("generated {} bytes for {}/{}", code.len(), package, name);
        Ok(code)
    }

    /// Read, generate and write one file. Nothing is written unless generation succeeds.
    pub fn compile(&self, job: &CompileJob) -> Result<CompileOutput, GenError> {
        let data = std::fs::read(&job.input).map_err(|source| GenError::Read {
            path: job.input.clone(),
            source,
        })?;
        let name = definition_name(&job.input)?;
        let source_file = job
            .input
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| job.input.display().to_string());

        let code = self.generate(job.kind, job.package(), &name, &source_file, &data)?;
        let path = job.output_path();
        if job.dry_run {
            return Ok(CompileOutput { path, code, written: false });
        }
        std::fs::write(&path, &code).map_err(|source| GenError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Wrote {} from {}", path.display(), job.input.display());
        Ok(CompileOutput { path, code, written: true })
    }
}

/// File stem of a definition path (`msg/Hello.msg` -> `Hello`).
pub fn definition_name(path: &Path) -> Result<String, GenError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GenError::Name(path.to_path_buf()))
}
