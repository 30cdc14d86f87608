use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::AppConfig;
use crate::course;
use crate::session::ChatSession;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();

    let files = course::find_course_files(&config.course_path)?;
    if files.is_empty() {
        println!("No PDF files found in {}", config.course_path);
        return Ok(());
    }

    println!("Loading {} course chapters...", files.len());
    let documents = course::upload_course(&config, &files).await?;
    println!("Course loaded. Posez votre question !");

    let mut session = ChatSession::initialize(&documents);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Some(reply) = session.send_message(&config, &line).await {
                    println!("{}", reply);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
