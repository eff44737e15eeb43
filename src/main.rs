//! Interactive console menu for the schedule organizer.
//!
//! Thin front-end over the library: collects lines from stdin, routes
//! them through the factory and the manager, and prints human-readable
//! status lines. Every user error is reported and the loop continues;
//! only option 7 (or end of input) exits, always with code 0.

use std::io::{self, BufRead, Write};

use astro_schedule::error::ScheduleError;
use astro_schedule::factory::create_task;
use astro_schedule::scheduler::{ConsoleConflictObserver, ScheduleManager};

fn main() -> io::Result<()> {
    init_tracing();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut manager = ScheduleManager::new();
    manager.add_observer(Box::new(ConsoleConflictObserver));

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter choice: ")? else {
            break;
        };
        let choice = match choice.parse::<u32>() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Error: please enter a number 1-7.");
                continue;
            }
        };

        match choice {
            1 => {
                let Some(description) = prompt(&mut input, "Enter description: ")? else {
                    break;
                };
                let Some(start) = prompt(&mut input, "Enter start time (HH:MM): ")? else {
                    break;
                };
                let Some(end) = prompt(&mut input, "Enter end time (HH:MM): ")? else {
                    break;
                };
                let Some(priority) = prompt(&mut input, "Enter priority (High/Medium/Low): ")?
                else {
                    break;
                };
                match create_task(description, start, end, priority)
                    .and_then(|task| manager.add_task(task))
                {
                    Ok(()) => println!("Task added successfully. No conflicts."),
                    // The registered console observer already reported the conflict.
                    Err(ScheduleError::Conflict { .. }) => {}
                    Err(e) => println!("Error: {e}"),
                }
            }
            2 => {
                let Some(description) = prompt(&mut input, "Enter task description to remove: ")?
                else {
                    break;
                };
                match manager.remove_task(&description) {
                    Ok(()) => println!("Task removed successfully."),
                    Err(e) => println!("Error: {e}"),
                }
            }
            3 => {
                let tasks = manager.tasks_by_start();
                if tasks.is_empty() {
                    println!("No tasks scheduled for the day.");
                } else {
                    for task in &tasks {
                        println!("{task}");
                    }
                }
            }
            4 => {
                let Some(description) = prompt(&mut input, "Enter task description to edit: ")?
                else {
                    break;
                };
                let Some(start) = prompt(&mut input, "Enter new start time (HH:MM): ")? else {
                    break;
                };
                let Some(end) = prompt(&mut input, "Enter new end time (HH:MM): ")? else {
                    break;
                };
                match manager.edit_task(&description, &start, &end) {
                    Ok(()) => println!("Task updated successfully."),
                    Err(e) => println!("Error: {e}"),
                }
            }
            5 => {
                let Some(description) =
                    prompt(&mut input, "Enter task description to mark complete: ")?
                else {
                    break;
                };
                match manager.mark_completed(&description) {
                    Ok(()) => println!("Task marked as completed."),
                    Err(e) => println!("Error: {e}"),
                }
            }
            6 => {
                let Some(priority) = prompt(&mut input, "Enter priority (High/Medium/Low): ")?
                else {
                    break;
                };
                let tasks = manager.tasks_with_priority(&priority);
                if tasks.is_empty() {
                    println!("No tasks found with priority: {priority}");
                } else {
                    for task in &tasks {
                        println!("{task}");
                    }
                }
            }
            7 => {
                tracing::info!("exited by user");
                break;
            }
            _ => println!("Invalid option. Try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("=== Astronaut Daily Schedule Organizer ===");
    println!("1. Add Task");
    println!("2. Remove Task");
    println!("3. View Tasks");
    println!("4. Edit Task");
    println!("5. Mark Task Completed");
    println!("6. View Tasks by Priority");
    println!("7. Exit");
}

/// Prints `label` and reads one trimmed line. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Log to stderr so events do not interleave with menu output.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
