use crate::cli::opt::{Db, Run};
use crate::cli::run::command::{Command, CommandParser};
use crate::cli::run::prompt::ScreenPrompt;
use anyhow::Error;
use journal_app::{App, EditorArgs, EditorScreen, ListPresenter, MainEvent, MainScreen, Route, ScreenError, Transition};
use journal_core::{DbAuthenticator, DbGateway, SessionState};
use journal_db::sea_orm::{ConnectOptions, Database};
use journal_db::schema::setup_schema;
use reedline::{Reedline, Signal};
use std::mem;
use std::time::Duration;
use tokio::time::timeout;

mod command;
mod prompt;

// How long to wait for list updates after a command before prompting again.
const SETTLE: Duration = Duration::from_millis(200);

type JournalApp = App<DbAuthenticator, DbGateway>;

enum Screen {
    SignIn,
    SignUp,
    Main(MainScreen<DbGateway>),
    Editor {
        editor: EditorScreen<DbGateway>,
        main: MainScreen<DbGateway>,
    },
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::SignIn => "sign-in",
            Screen::SignUp => "sign-up",
            Screen::Main(_) => "journal",
            Screen::Editor { .. } => "editor",
        }
    }

    fn help(&self) -> &'static str {
        match self {
            Screen::SignIn => "/signin <email> <password>, /signup to create an account, /exit",
            Screen::SignUp => "/signup <email> <password>, /back, /exit",
            Screen::Main(_) => "/list, /new, /edit <n>, /delete <n>, /signout, /exit",
            Screen::Editor { .. } => "/title <text>, /content <text>, plain lines add to the content, /save, /cancel",
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

fn build_connect_options(db_options: &Db) -> ConnectOptions {
    let mut options = ConnectOptions::new(db_options.database_url.clone());
    if let Some(min_connections) = db_options.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        options.max_connections(max_connections);
    }
    if let Some(seconds) = db_options.db_acquire_timeout {
        options.acquire_timeout(Duration::from_secs(seconds));
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);
    options
}

pub(crate) async fn run(opt: Run) -> Result<(), Error> {
    let _guard = opt
        .debug
        .then(|| {
            journal_utils::tracing::setup(
                journal_utils::tracing::TracingConfig::builder()
                    .package(env!("CARGO_PKG_NAME"))
                    .version(env!("CARGO_PKG_VERSION"))
                    .sentry_dsn(opt.sentry_dsn.clone())
                    .env(opt.env.clone())
                    .build(),
            )
        })
        .transpose()?;

    let conn = Database::connect(build_connect_options(&opt.db)).await?;
    setup_schema(&conn).await?;
    tracing::info!("connected to journal database");

    let session = SessionState::default();
    let app = App::new(
        DbAuthenticator::new(conn.clone()),
        DbGateway::new(conn).scoped_to(session.clone()),
        session,
    );
    let mut shell = Shell {
        app,
        screen: Screen::SignIn,
    };

    let parser = CommandParser::new()?;
    let mut line_editor = Reedline::create();

    println!("Welcome to your journal. {}", shell.screen.help());

    loop {
        let prompt = ScreenPrompt::new(shell.screen.name());
        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(user_input) => {
                if opt.debug {
                    tracing::debug!(input = %user_input, "got input");
                }
                let command = match parser.parse(&user_input) {
                    Ok(command) => command,
                    Err(error) => {
                        eprintln!("{error}");
                        continue;
                    }
                };
                if let Flow::Exit = shell.handle(command).await {
                    println!("Exiting...");
                    break;
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                break;
            }
        }
    }

    shell.leave();
    Ok(())
}

struct Shell {
    app: JournalApp,
    screen: Screen,
}

impl Shell {
    async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Exit => return Flow::Exit,
            Command::Help => println!("{}", self.screen.help()),
            command => {
                let screen = mem::replace(&mut self.screen, Screen::SignIn);
                self.screen = match screen {
                    Screen::SignIn => self.on_sign_in(command).await,
                    Screen::SignUp => self.on_sign_up(command).await,
                    Screen::Main(main) => self.on_main(main, command).await,
                    Screen::Editor { editor, main } => self.on_editor(editor, main, command).await,
                };
            }
        }
        Flow::Continue
    }

    async fn on_sign_in(&self, command: Command) -> Screen {
        let outcome = match command {
            Command::SignIn { email, password } => self.app.sign_in().submit(&email, &password).await,
            Command::SignUp(None) => Ok(self.app.sign_in().create_account()),
            Command::SignUp(Some((email, password))) => self.app.sign_up().submit(&email, &password).await,
            _ => return unsupported(Screen::SignIn),
        };
        self.follow(outcome, Screen::SignIn).await
    }

    async fn on_sign_up(&self, command: Command) -> Screen {
        let outcome = match command {
            Command::SignUp(credentials) => {
                let (email, password) = credentials.unwrap_or_default();
                self.app.sign_up().submit(&email, &password).await
            }
            Command::Back => Ok(Transition::to(Route::SignIn)),
            _ => return unsupported(Screen::SignUp),
        };
        self.follow(outcome, Screen::SignUp).await
    }

    /// Moves to the screen a session screen routed to, or stays on `current` after a failure.
    async fn follow(&self, outcome: Result<Transition, ScreenError>, current: Screen) -> Screen {
        let transition = match outcome {
            Ok(transition) => transition,
            Err(error) => {
                eprintln!("{error}");
                return current;
            }
        };
        if let Some(notice) = transition.notice {
            println!("{notice}");
        }

        match transition.route {
            Route::SignIn => Screen::SignIn,
            Route::SignUp => {
                println!("{}", Screen::SignUp.help());
                Screen::SignUp
            }
            Route::Main => match self.app.main().await {
                Ok(main) => self.settle(main, None).await,
                Err(error) => {
                    eprintln!("{error}");
                    Screen::SignIn
                }
            },
            Route::Editor(_) | Route::Close => current,
        }
    }

    async fn on_main(&self, mut main: MainScreen<DbGateway>, command: Command) -> Screen {
        match command {
            Command::List => {
                print_list(main.presenter());
                self.settle(main, None).await
            }
            Command::New => match main.add_entry().route {
                Route::Editor(args) => self.open_editor(args, main),
                _ => Screen::Main(main),
            },
            Command::Edit(index) => {
                let queued = main.edit_row(index);
                self.act_on_row(main, queued, index).await
            }
            Command::Delete(index) => {
                let queued = main.delete_row(index);
                self.act_on_row(main, queued, index).await
            }
            Command::SignOut => {
                let transition = main.sign_out().await;
                tracing::debug!(route = ?transition.route, "signed out");
                println!("Signed out. {}", Screen::SignIn.help());
                Screen::SignIn
            }
            _ => unsupported(Screen::Main(main)),
        }
    }

    async fn on_editor(&self, mut editor: EditorScreen<DbGateway>, main: MainScreen<DbGateway>, command: Command) -> Screen {
        match command {
            Command::Title(title) => editor.set_title(title),
            Command::Content(content) => editor.set_content(content),
            Command::Text(line) => {
                let content = if editor.content().is_empty() {
                    line
                } else {
                    format!("{}\n{line}", editor.content())
                };
                editor.set_content(content);
            }
            Command::Save => match editor.submit().await {
                Ok(transition) => {
                    if let Some(notice) = transition.notice {
                        println!("{notice}");
                    }
                    return self.settle(main, None).await;
                }
                Err(error) => eprintln!("{error}"),
            },
            Command::Cancel => return self.settle(main, None).await,
            _ => return unsupported(Screen::Editor { editor, main }),
        }
        Screen::Editor { editor, main }
    }

    fn open_editor(&self, args: EditorArgs, main: MainScreen<DbGateway>) -> Screen {
        let editor = self.app.editor(args);
        if !editor.title().is_empty() {
            println!("Title: {}\n{}", editor.title(), editor.content());
        }
        let screen = Screen::Editor { editor, main };
        println!("{}", screen.help());
        screen
    }

    async fn act_on_row(&self, mut main: MainScreen<DbGateway>, queued: bool, index: usize) -> Screen {
        if !queued {
            eprintln!("There is no entry {}", index + 1);
            return Screen::Main(main);
        }
        // The row action is queued, so this returns without waiting on the subscription.
        let first = main.next_event().await;
        self.settle(main, first).await
    }

    /// Shows `first` and whatever list updates arrive shortly after it.
    async fn settle(&self, mut main: MainScreen<DbGateway>, first: Option<MainEvent>) -> Screen {
        let mut open = None;
        let mut pending = first;
        loop {
            let event = match pending.take() {
                Some(event) => event,
                None => match timeout(SETTLE, main.next_event()).await {
                    Ok(Some(event)) => event,
                    Ok(None) | Err(_) => break,
                },
            };
            match event {
                MainEvent::Refreshed(_) => print_list(main.presenter()),
                MainEvent::Navigate(Route::Editor(args)) => open = Some(args),
                MainEvent::Navigate(route) => tracing::debug!(?route, "ignored navigation"),
                MainEvent::Notice(notice) => println!("{notice}"),
                MainEvent::Failed(error) => eprintln!("{error}"),
            }
        }

        match open {
            Some(args) => self.open_editor(args, main),
            None => Screen::Main(main),
        }
    }

    fn leave(&mut self) {
        match &mut self.screen {
            Screen::Main(main) | Screen::Editor { main, .. } => main.close(),
            Screen::SignIn | Screen::SignUp => {}
        }
    }
}

fn unsupported(screen: Screen) -> Screen {
    eprintln!("Not available here. {}", screen.help());
    screen
}

fn print_list(presenter: &ListPresenter) {
    if presenter.count() == 0 {
        println!("No entries yet. Use /new to write one.");
        return;
    }
    for (number, entry) in presenter.rows().iter().enumerate() {
        println!("{:>3}. {}", number + 1, entry.title);
        for line in entry.content.lines() {
            println!("     {line}");
        }
    }
}
