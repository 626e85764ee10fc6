use crate::core::catalog::PetCatalog;
use crate::core::{reporter, HttpSource};
use crate::utils::error::{PetStoreError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT_LIST: &str = "Press A to: view all available pets ";
pub const PROMPT_BY_CATEGORY: &str = "Press B to: view all pets by category in reverse order";
pub const UNRECOGNISED_INPUT: &str = "Input not recognised. Please enter A or B";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListAvailable,
    ByCategoryReversed,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(Self::ListAvailable),
            "b" => Some(Self::ByCategoryReversed),
            _ => None,
        }
    }
}

/// 互動式選單：讀取指令、執行管線、輸出報表，直到輸入結束
pub struct Console<H: HttpSource, R, W> {
    catalog: PetCatalog<H>,
    input: R,
    output: W,
}

impl<H, R, W> Console<H, R, W>
where
    H: HttpSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(catalog: PetCatalog<H>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.write_line(PROMPT_LIST).await?;
            self.write_line(PROMPT_BY_CATEGORY).await?;

            // 非 UTF-8 的輸入視為無法辨識的指令，不中斷迴圈
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf).await? == 0 {
                tracing::info!("Input closed, leaving console");
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);

            let Some(command) = Command::parse(&line) else {
                tracing::debug!("Unrecognised input: {:?}", line.trim_end());
                self.write_line(UNRECOGNISED_INPUT).await?;
                continue;
            };

            match self.execute(command).await {
                Ok(report) => {
                    if !report.is_empty() {
                        self.write_line(&report).await?;
                    }
                }
                Err(e) => self.report_failure(command, &e).await?,
            }
        }
    }

    pub async fn execute(&self, command: Command) -> Result<String> {
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::ListAvailable => {
                let pets = self.catalog.available_pets().await?;
                Ok(reporter::render(&pets))
            }
            Command::ByCategoryReversed => {
                let listing = self.catalog.by_category_reversed().await?;
                Ok(reporter::render_by_category(&listing.ordered))
            }
        }
    }

    async fn report_failure(&mut self, command: Command, e: &PetStoreError) -> Result<()> {
        tracing::error!(
            "❌ {:?} failed: {} (Category: {:?}, Severity: {:?})",
            command,
            e,
            e.category(),
            e.severity()
        );

        self.write_line(&format!("❌ {}", e.user_friendly_message()))
            .await?;
        self.write_line(&format!("💡 Suggestion: {}", e.recovery_suggestion()))
            .await
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}
