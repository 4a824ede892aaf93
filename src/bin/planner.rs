use std::error::Error;

use chrono::NaiveDate;

use planner_edit::client::Client;
use planner_edit::config;
use planner_edit::editor::{CommitOutcome, SubmitOutcome};
use planner_edit::feedback::{feedback_channel, pending_events};
use planner_edit::form::{DESCRIPTION, DIALOG_TITLE};
use planner_edit::{EventId, PlannerEditor, Session};

const USAGE: &str = "Usage:
    planner show <id>
    planner rename <id> <title>
    planner range <id> <from> <to>     (dates as YYYY-MM-DD)

The server is read from $PLANNER_API_URL, the session ID from $PLANNER_SID.";


#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args).await {
        log::error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (command, id) = match (args.get(0), args.get(1)) {
        (Some(command), Some(id)) => (command.as_str(), id.parse::<EventId>()?),
        _ => return Err(USAGE.into()),
    };

    let client = Client::from_config()?;
    let session = Session::from_env(config::SESSION_VAR);
    let (sender, mut receiver) = feedback_channel();
    let mut editor = PlannerEditor::new_with_feedback_channel(client, sender);

    let result = run_command(&mut editor, command, id, &args[2..], session.as_ref()).await;
    for event in pending_events(&mut receiver) {
        println!("{}", event);
    }
    result
}

async fn run_command(editor: &mut PlannerEditor<Client>, command: &str, id: EventId, args: &[String], session: Option<&Session>) -> Result<(), Box<dyn Error>> {
    editor.load(id).await?;

    match (command, args) {
        ("show", []) => {
            if let Some(umbrella) = editor.umbrella() {
                println!("{}\t{}", umbrella.id(), umbrella.title());
                if let Some(picker) = editor.date_picker() {
                    println!("  {}", picker.label());
                }
            }
        },
        ("rename", [title]) => {
            editor.open_title_dialog();
            println!("{}\n  {}", DIALOG_TITLE, DESCRIPTION);
            if let SubmitOutcome::Rejected(message) = editor.submit_title(title, session).await? {
                return Err(message.into());
            }
        },
        ("range", [from, to]) => {
            let from = NaiveDate::parse_from_str(from, "%Y-%m-%d")?;
            let to = NaiveDate::parse_from_str(to, "%Y-%m-%d")?;
            if editor.on_date_picker_close(Some(from), Some(to), session).await? == CommitOutcome::Skipped {
                println!("The range is unchanged");
            }
        },
        _ => return Err(USAGE.into()),
    }
    Ok(())
}
