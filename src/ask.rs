/// The single operation: build the request, call the API, render the answer.
use crate::api::{ChatRequest, PerplexityClient, PplxError, Query, extract};
use crate::cli::OutputCtx;
use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::{render_raw, render_text, save};

/// Run one question end to end.
///
/// # Errors
///
/// Returns `PplxError` when the key is missing, the request fails, the
/// response cannot be parsed, or the output file cannot be written.
pub async fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), PplxError> {
    // Key resolution happens before anything touches the network.
    let api_key = cli.api_key.clone().ok_or(PplxError::MissingApiKey)?;

    let query = Query {
        question: cli.question.clone(),
        system: cli.system.clone(),
        model: cli.model.clone(),
        max_tokens: cli.max_tokens,
        temperature: cli.temperature,
        citations: cli.citations && !cli.no_citations,
        images: cli.images,
        related_questions: cli.related_questions,
        domain_filter: cli.domain_filter.clone(),
        recency: cli.recency,
    };

    let _t_build = ctx.timer("build_request");
    let request = ChatRequest::build(&query);
    drop(_t_build);

    let client = PerplexityClient::new(api_key, &cli.base_url)?;

    let _t_http = ctx.timer("chat_completion");
    let raw = client.chat_completion(&request).await?;
    drop(_t_http);

    // The JSON modes echo the body verbatim; only text mode needs the
    // chat-completions shape.
    let rendered = match ctx.format {
        OutputFormat::Text => render_text(&extract(&raw)?, ctx),
        OutputFormat::Json | OutputFormat::Compact => render_raw(&raw, ctx.format),
    };
    println!("{rendered}");

    if let Some(path) = &cli.save {
        save(path, &rendered)?;
        eprintln!("\nResponse saved to: {}", path.display());
    }

    Ok(())
}
