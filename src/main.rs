mod app;
mod cli;
mod cli_ops;
mod completions;
mod config;
mod date_key;
mod db;
mod domain;
mod editors;
mod merge;
mod navigator;
mod repository;
mod store;
mod ui;

use app::{App, AppError, DayView};
use cli::{
    BigThreeArgs, Commands, HealthSubcommands, MedsSubcommands, MedsTaken, PersonalSubcommands,
    ReflectSubcommands, TaskSubcommands, WorkSubcommands, WorkoutSubcommands,
};
use date_key::DateKey;
use domain::goals::GoalValue;
use domain::record::{DayRecord, Prompt};
use domain::task::Eisenhower;
use editors::{Edit, HealthEdit, PersonalEdit, PlannerEdit, ReflectionEdit, WorkEdit};

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("DAYBOOK_LOG", "warn")).init();
}

fn print_json(value: &impl serde::Serialize) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_day(view: &DayView, json: bool, palette: &ui::Palette) -> Result<(), AppError> {
    if json {
        return print_json(view);
    }
    ui::print_day(view, palette);
    Ok(())
}

fn run() -> Result<(), AppError> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    if let Commands::Completions(args) = &cli.command {
        return completions::run_completions_command(args.shell);
    }

    let config = config::DaybookConfig::load(&cli.config)?;
    let palette = ui::Palette::new(config.color);
    let mut app = App::open(&cli.db, config);
    let date = match cli.date.as_deref() {
        Some(raw) => raw.parse::<DateKey>()?,
        None => app.current_date(),
    };
    log::debug!("operating on {date}");
    let json = cli.json;

    match cli.command {
        Commands::Show => render_day(&app.view(date), json, &palette)?,
        Commands::Next(args) => {
            let view = app.step(date, i64::from(args.days))?;
            render_day(&view, json, &palette)?;
        }
        Commands::Prev(args) => {
            let view = app.step(date, -i64::from(args.days))?;
            render_day(&view, json, &palette)?;
        }
        Commands::Today => render_day(&app.go_to_today(), json, &palette)?,
        Commands::Goto(args) => {
            let target = args.date.parse::<DateKey>()?;
            render_day(&app.go_to(target), json, &palette)?;
        }
        Commands::Work(args) => {
            let view = run_work(&mut app, date, args.command)?;
            render_day(&view, json, &palette)?;
        }
        Commands::Personal(args) => {
            let view = run_personal(&mut app, date, args.command)?;
            render_day(&view, json, &palette)?;
        }
        Commands::Health(args) => {
            let view = run_health(&mut app, date, args.command)?;
            render_day(&view, json, &palette)?;
        }
        Commands::Reflect(args) => {
            let view = run_reflect(&mut app, date, args.command)?;
            render_day(&view, json, &palette)?;
        }
        Commands::Patch(args) => {
            let partial: serde_json::Value = serde_json::from_str(&args.patch).map_err(|err| {
                AppError::InvalidArgument(format!("patch is not valid JSON: {err}"))
            })?;
            let view = app.patch(date, &partial)?;
            render_day(&view, json, &palette)?;
        }
        Commands::Ls => {
            let days = app.list_days();
            if json {
                print_json(&days)?;
            } else {
                ui::print_day_list(&days, &palette);
            }
        }
        Commands::Export(args) => {
            let blob = app.export_blob()?;
            match args.output {
                Some(path) => {
                    std::fs::write(&path, blob)?;
                    eprintln!("exported day records to {}", path.display());
                }
                None => println!("{blob}"),
            }
        }
        Commands::Import(args) => {
            let raw = std::fs::read_to_string(&args.file)?;
            let summary = app.import_blob(&raw)?;
            if json {
                print_json(&summary)?;
            } else {
                ui::print_import(&summary, &palette);
            }
        }
        Commands::Completions(_) => {
            unreachable!("completions are handled before app initialization")
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlannerSection {
    Work,
    Personal,
}

impl PlannerSection {
    fn edit(self, edit: PlannerEdit) -> Edit {
        match self {
            PlannerSection::Work => Edit::Work(WorkEdit::Planner(edit)),
            PlannerSection::Personal => Edit::Personal(PersonalEdit::Planner(edit)),
        }
    }

    fn matrix(self, record: &DayRecord) -> &Eisenhower {
        match self {
            PlannerSection::Work => &record.work.eisenhower,
            PlannerSection::Personal => &record.personal.eisenhower,
        }
    }
}

fn run_work(app: &mut App, date: DateKey, command: WorkSubcommands) -> Result<DayView, AppError> {
    match command {
        WorkSubcommands::Task(args) => run_task(app, date, PlannerSection::Work, args.command),
        WorkSubcommands::Big3(args) => run_big_three(app, date, PlannerSection::Work, args),
        WorkSubcommands::Outreach(args) => app.edit(
            date,
            Edit::Work(WorkEdit::ToggleOutreach {
                kind: args.kind.into(),
                index: args.index,
            }),
        ),
        WorkSubcommands::Notes(args) => app.edit(date, Edit::Work(WorkEdit::SetNotes(args.text))),
    }
}

fn run_personal(
    app: &mut App,
    date: DateKey,
    command: PersonalSubcommands,
) -> Result<DayView, AppError> {
    match command {
        PersonalSubcommands::Task(args) => {
            run_task(app, date, PlannerSection::Personal, args.command)
        }
        PersonalSubcommands::Big3(args) => {
            run_big_three(app, date, PlannerSection::Personal, args)
        }
        PersonalSubcommands::Goal(args) => {
            let value = GoalValue::parse_optional(&args.value)
                .map_err(|err| AppError::InvalidArgument(err.to_string()))?;
            app.edit(
                date,
                Edit::Personal(PersonalEdit::SetGoal {
                    goal: args.goal,
                    value,
                }),
            )
        }
        PersonalSubcommands::Notes(args) => {
            app.edit(date, Edit::Personal(PersonalEdit::SetNotes(args.text)))
        }
    }
}

fn run_task(
    app: &mut App,
    date: DateKey,
    section: PlannerSection,
    command: TaskSubcommands,
) -> Result<DayView, AppError> {
    let edit = match command {
        TaskSubcommands::Add(args) => {
            let add = section.edit(PlannerEdit::AddTask(args.quadrant));
            let Some(text) = args.text else {
                return app.edit(date, add);
            };
            let index = section
                .matrix(&app.view(date).record)
                .tasks(args.quadrant)
                .len();
            let fill = section.edit(PlannerEdit::SetTaskText {
                quadrant: args.quadrant,
                index,
                text,
            });
            return app.edit_all(date, vec![add, fill]);
        }
        TaskSubcommands::Text(args) => PlannerEdit::SetTaskText {
            quadrant: args.quadrant,
            index: args.index,
            text: args.text,
        },
        TaskSubcommands::Done(args) => PlannerEdit::SetTaskCompleted {
            quadrant: args.quadrant,
            index: args.index,
            completed: true,
        },
        TaskSubcommands::Undone(args) => PlannerEdit::SetTaskCompleted {
            quadrant: args.quadrant,
            index: args.index,
            completed: false,
        },
        TaskSubcommands::Toggle(args) => PlannerEdit::ToggleTask {
            quadrant: args.quadrant,
            index: args.index,
        },
        TaskSubcommands::Rm(args) => PlannerEdit::RemoveTask {
            quadrant: args.quadrant,
            index: args.index,
        },
    };
    app.edit(date, section.edit(edit))
}

fn big_three_edits(args: BigThreeArgs) -> Result<Vec<PlannerEdit>, AppError> {
    let index = args.index;
    let mut edits = Vec::new();
    if let Some(text) = args.text {
        edits.push(PlannerEdit::SetBigThreeText { index, text });
    }
    if args.done || args.undone {
        edits.push(PlannerEdit::SetBigThreeCompleted {
            index,
            completed: args.done,
        });
    }
    if args.toggle {
        edits.push(PlannerEdit::ToggleBigThree { index });
    }
    if edits.is_empty() {
        return Err(AppError::InvalidArgument(
            "nothing to change; pass --text, --done, --undone or --toggle".to_string(),
        ));
    }
    Ok(edits)
}

fn run_big_three(
    app: &mut App,
    date: DateKey,
    section: PlannerSection,
    args: BigThreeArgs,
) -> Result<DayView, AppError> {
    let edits = big_three_edits(args)?
        .into_iter()
        .map(|edit| section.edit(edit))
        .collect();
    app.edit_all(date, edits)
}

fn run_health(
    app: &mut App,
    date: DateKey,
    command: HealthSubcommands,
) -> Result<DayView, AppError> {
    let edit = match command {
        HealthSubcommands::Meal(args) => {
            if args.on || args.off {
                HealthEdit::SetMeal {
                    meal: args.meal,
                    eaten: args.on,
                }
            } else {
                HealthEdit::ToggleMeal(args.meal)
            }
        }
        HealthSubcommands::Stretch(args) => HealthEdit::SetStretch(args.value.as_option()),
        HealthSubcommands::Shower(args) => HealthEdit::SetShower(args.value.as_option()),
        HealthSubcommands::Workout(args) => match args.command {
            WorkoutSubcommands::Add(args) => {
                let index = app.view(date).record.health.workouts.len();
                let mut edits = vec![Edit::Health(HealthEdit::AddWorkout)];
                if let Some(kind) = args.kind {
                    edits.push(Edit::Health(HealthEdit::SetWorkoutType { index, kind }));
                }
                if let Some(duration) = args.duration {
                    edits.push(Edit::Health(HealthEdit::SetWorkoutDuration {
                        index,
                        duration,
                    }));
                }
                return app.edit_all(date, edits);
            }
            WorkoutSubcommands::Type(args) => HealthEdit::SetWorkoutType {
                index: args.index,
                kind: args.kind,
            },
            WorkoutSubcommands::Duration(args) => HealthEdit::SetWorkoutDuration {
                index: args.index,
                duration: args.duration,
            },
            WorkoutSubcommands::Rm(args) => HealthEdit::RemoveWorkout(args.index),
        },
        HealthSubcommands::Meds(args) => match args.command {
            MedsSubcommands::Taken(args) => {
                HealthEdit::SetMedicationTaken(args.value == MedsTaken::Yes)
            }
            MedsSubcommands::What(args) => HealthEdit::SetMedicationWhat(args.text),
        },
    };
    app.edit(date, Edit::Health(edit))
}

fn run_reflect(
    app: &mut App,
    date: DateKey,
    command: ReflectSubcommands,
) -> Result<DayView, AppError> {
    let edit = match command {
        ReflectSubcommands::Rose(args) => answer(Prompt::Rose, args.text),
        ReflectSubcommands::Bud(args) => answer(Prompt::Bud, args.text),
        ReflectSubcommands::Thorn(args) => answer(Prompt::Thorn, args.text),
        ReflectSubcommands::Laugh(args) => answer(Prompt::Laugh, args.text),
        ReflectSubcommands::Gratitude(args) => ReflectionEdit::SetGratitude {
            index: args.index,
            text: args.text,
        },
    };
    app.edit(date, Edit::Reflection(edit))
}

fn answer(prompt: Prompt, text: String) -> ReflectionEdit {
    ReflectionEdit::SetAnswer { prompt, text }
}
