use crate::Cli;
use crate::board_commands::BoardCommands;
use crate::column_commands::ColumnCommands;
use crate::commands::Commands;
use crate::task_commands::TaskCommands;
use crate::attachment_commands::AttachmentCommands;

use clap::Parser;

#[test]
fn test_pretty_flag_is_global() {
    let cli = Cli::try_parse_from(["kb", "project", "list", "--pretty"]).unwrap();
    assert!(cli.pretty);
}

#[test]
fn test_task_drop_arguments() {
    let cli = Cli::try_parse_from([
        "kb",
        "task",
        "drop",
        "t-1",
        "--project-id",
        "p-1",
        "--column-id",
        "c-1",
    ])
    .unwrap();

    match cli.command {
        Commands::Task {
            action:
                TaskCommands::Drop {
                    id,
                    project_id,
                    column_id,
                },
        } => {
            assert_eq!(id, "t-1");
            assert_eq!(project_id, "p-1");
            assert_eq!(column_id, "c-1");
        }
        _ => panic!("expected task drop"),
    }
}

#[test]
fn test_column_create_default_color() {
    let cli = Cli::try_parse_from([
        "kb",
        "column",
        "create",
        "--project-id",
        "p-1",
        "--title",
        "Blocked",
    ])
    .unwrap();

    match cli.command {
        Commands::Column {
            action:
                ColumnCommands::Create {
                    worksheet_id,
                    title,
                    color,
                    ..
                },
        } => {
            assert!(worksheet_id.is_none());
            assert_eq!(title, "Blocked");
            assert_eq!(color, "#94a3b8");
        }
        _ => panic!("expected column create"),
    }
}

#[test]
fn test_column_reorder_requires_numeric_position() {
    let result = Cli::try_parse_from([
        "kb",
        "column",
        "reorder",
        "c-1",
        "--project-id",
        "p-1",
        "--position",
        "first",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_attachment_type_flag() {
    let cli = Cli::try_parse_from([
        "kb",
        "attachment",
        "add",
        "--project-id",
        "p-1",
        "--task-id",
        "t-1",
        "--name",
        "brief.pdf",
        "--url",
        "https://example.com/brief.pdf",
        "--type",
        "application/pdf",
        "--size",
        "2048",
    ])
    .unwrap();

    match cli.command {
        Commands::Attachment {
            action:
                AttachmentCommands::Add {
                    content_type, size, ..
                },
        } => {
            assert_eq!(content_type, "application/pdf");
            assert_eq!(size, 2048);
        }
        _ => panic!("expected attachment add"),
    }
}

#[test]
fn test_board_show_text_flag() {
    let cli = Cli::try_parse_from(["kb", "board", "show", "p-1", "--text"]).unwrap();

    match cli.command {
        Commands::Board {
            action: BoardCommands::Show { text, .. },
        } => assert!(text),
        _ => panic!("expected board show"),
    }
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["kb"]).is_err());
}
