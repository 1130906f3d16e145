use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::io::{FileStream, IoError, Reader, Writer};
use crate::utils::Config;

/// Backend behind the input or the output of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StreamKind {
    /// A `.cell` file at the matching path
    File,
    /// A stream supplied by the embedding program
    Custom,
}

/// Conway's Game of Life on a self-trimming grid
#[derive(Parser, Debug, Clone)]
#[command(name = "gameoflife", version, about, long_about = None)]
pub struct Cli {
    /// Backend of the initial generation
    #[arg(long = "inputtype", value_enum, require_equals = true)]
    pub input_type: StreamKind,

    /// Path of the initial generation, required for `--inputtype=file`
    #[arg(long = "inputpath", require_equals = true)]
    pub input_path: Option<PathBuf>,

    /// Backend of the final generation
    #[arg(long = "outputtype", value_enum, require_equals = true)]
    pub output_type: StreamKind,

    /// Path of the final generation, required for `--outputtype=file`
    #[arg(long = "outputpath", require_equals = true)]
    pub output_path: Option<PathBuf>,

    /// Number of generations to compute
    #[arg(long = "generation", require_equals = true, allow_negative_numbers = true)]
    pub generation: i64,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("no input path provided (use: --inputpath=[input path])")]
    NoInputPath,

    #[error("no output path provided (use: --outputpath=[output path])")]
    NoOutputPath,

    #[error("no custom reader provided")]
    NoCustomReader,

    #[error("no custom writer provided")]
    NoCustomWriter,

    #[error("generation is {0}, should be at least 1")]
    LessThanOneGeneration(i64),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Resolved configuration of a run.
pub struct Params {
    generations: u32,
    reader: Box<dyn Reader>,
    writer: Box<dyn Writer>,
}

impl Params {
    /// Parses `--key=value` tokens (without the program name).
    ///
    /// `reader` and `writer` are used when the matching type is `custom`.
    pub fn new<I, T>(
        args: I,
        reader: Option<Box<dyn Reader>>,
        writer: Option<Box<dyn Writer>>,
    ) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from("gameoflife"))
            .chain(args.into_iter().map(Into::into));
        let cli = Cli::try_parse_from(argv)?;
        Self::from_cli(&cli, reader, writer)
    }

    pub fn from_cli(
        cli: &Cli,
        reader: Option<Box<dyn Reader>>,
        writer: Option<Box<dyn Writer>>,
    ) -> Result<Self, ParamError> {
        let input_path =
            Self::required_path(cli.input_type, cli.input_path.as_ref(), ParamError::NoInputPath)?;
        if cli.input_type == StreamKind::Custom && reader.is_none() {
            return Err(ParamError::NoCustomReader);
        }
        let output_path =
            Self::required_path(cli.output_type, cli.output_path.as_ref(), ParamError::NoOutputPath)?;
        if cli.output_type == StreamKind::Custom && writer.is_none() {
            return Err(ParamError::NoCustomWriter);
        }

        let generations = u32::try_from(cli.generation)
            .ok()
            .filter(|&n| n >= Config::MIN_GENERATIONS)
            .ok_or(ParamError::LessThanOneGeneration(cli.generation))?;

        let reader: Box<dyn Reader> = match (input_path, reader) {
            (Some(path), _) => Box::new(FileStream::new(path)?),
            (None, Some(reader)) => reader,
            (None, None) => return Err(ParamError::NoCustomReader),
        };
        let writer: Box<dyn Writer> = match (output_path, writer) {
            (Some(path), _) => Box::new(FileStream::new(path)?),
            (None, Some(writer)) => writer,
            (None, None) => return Err(ParamError::NoCustomWriter),
        };
        Ok(Self {
            generations,
            reader,
            writer,
        })
    }

    /// Returns the path for a `file` stream, `None` for a `custom` one.
    fn required_path(
        kind: StreamKind,
        path: Option<&PathBuf>,
        missing: ParamError,
    ) -> Result<Option<PathBuf>, ParamError> {
        match kind {
            StreamKind::Custom => Ok(None),
            StreamKind::File => match path {
                Some(path) if !path.as_os_str().is_empty() => Ok(Some(path.clone())),
                _ => Err(missing),
            },
        }
    }

    pub fn generations(&self) -> u32 {
        self.generations
    }

    pub fn reader(&mut self) -> &mut dyn Reader {
        self.reader.as_mut()
    }

    pub fn writer(&mut self) -> &mut dyn Writer {
        self.writer.as_mut()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}
