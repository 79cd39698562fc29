//! Chat command

use crate::Config;
use anyhow::Result;
use clap::Args;
use groq::{Groq, Message, Request, Usage};
use rustyline::{DefaultEditor, error::ReadlineError};

/// System prompt for interactive chats
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Keep your responses concise and to the point.";

/// Chat command arguments
#[derive(Debug, Args)]
pub struct ChatCmd {
    /// Maximum tokens to generate per reply
    #[arg(long, default_value_t = 150)]
    pub max_tokens: usize,
}

impl ChatCmd {
    /// Run the chat command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let provider = config.provider()?;
        let template = Request::new(config.model.as_str(), Vec::new())
            .with_temperature(config.temperature)
            .with_max_tokens(self.max_tokens);
        let mut conversation = Conversation::new(SYSTEM_PROMPT);
        let mut editor = DefaultEditor::new()?;

        println!("Chat started! Type 'exit' to end the conversation.");
        loop {
            let line = match editor.readline("\nYou: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") {
                break;
            }
            let _ = editor.add_history_entry(input);

            match conversation.turn(&provider, &template, input).await {
                Ok((reply, usage)) => {
                    println!("\nAssistant: {reply}");
                    println!(
                        "\nTokens used: {} (Prompt: {}, Completion: {})",
                        usage.total_tokens, usage.prompt_tokens, usage.completion_tokens
                    );
                }
                Err(e) => eprintln!("\nError: {e}"),
            }
        }

        Ok(())
    }
}

/// Conversation history, in the order it is sent to the model.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the given system prompt
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system)],
        }
    }

    /// The messages so far
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send one user turn and record the assistant reply.
    ///
    /// If the call fails, the user message is dropped again so the history
    /// never holds an unanswered turn.
    pub async fn turn(
        &mut self,
        provider: &Groq,
        template: &Request,
        input: &str,
    ) -> Result<(String, Usage)> {
        self.messages.push(Message::user(input));
        let response = match provider.send(&template.messages(&self.messages)).await {
            Ok(response) => response,
            Err(e) => {
                self.messages.pop();
                return Err(e.into());
            }
        };

        let Some(reply) = response.content() else {
            self.messages.pop();
            anyhow::bail!("response contained no choices");
        };
        self.messages.push(Message::assistant(reply));
        Ok((reply.to_owned(), response.usage))
    }
}
