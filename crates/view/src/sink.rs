//! Hand-off point to renderers

use crate::builder::ViewModelBuilder;
use crate::options::BuildOptions;
use crate::view::DocumentView;
use std::io::Write;
use swagger_docgen_common::{Document, Result};

/// Something that consumes a finished view model, e.g. a template renderer
#[cfg_attr(test, mockall::automock)]
pub trait ViewSink {
    fn accept(&mut self, view: &DocumentView) -> Result<()>;
}

/// Build the view model and pass it to `sink`
///
/// The sink only ever sees complete view models: if the build fails, it is
/// not called.
pub fn publish(
    document: &Document,
    options: &BuildOptions,
    sink: &mut dyn ViewSink,
) -> Result<()> {
    let view = ViewModelBuilder::new(options.clone()).build(document)?;
    sink.accept(&view)
}

/// Output encoding for `SerializingSink`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Writes the view model as JSON or YAML
pub struct SerializingSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> SerializingSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ViewSink for SerializingSink<W> {
    fn accept(&mut self, view: &DocumentView) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, view)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Yaml => serde_yaml::to_writer(&mut self.writer, view)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
