use crate::component::Component;
use crate::event::Event;
use crate::rendering::{Fabric, Renderer, Size};
use crate::requester::PhotoRequester;
use crate::system_effect::SystemEffect;

use std::io::{self, Stdout, Write};
use std::panic;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam::channel::{self, Receiver, Sender};
use crossbeam::select;
use crossterm::cursor::{Hide as HideCursor, Show as ShowCursor};
use crossterm::event::{read, Event as CrosstermEvent};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::QueueableCommand;

use crate::api::{SearchRequest, SearchResponse};

pub struct App {
    stdout: Stdout,
    renderer: Renderer,
}

impl App {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let renderer = Renderer::new();
        App { stdout, renderer }
    }

    pub fn run<Props>(
        &mut self,
        root: &mut impl Component<Props, Event, SystemEffect>,
        mut requester: PhotoRequester,
    ) {
        self.set_up();

        #[cfg(feature = "logging")]
        log::info!("Running.");

        let requester_handle: JoinHandle<_>;
        // NOTE: This code block is used to control the lifetime of the channels.
        {
            let (request_tx, request_rx): (Sender<SearchRequest>, Receiver<SearchRequest>) =
                channel::unbounded();
            let (response_tx, response_rx): (Sender<SearchResponse>, Receiver<SearchResponse>) =
                channel::unbounded();
            let (term_event_tx, term_event_rx): (Sender<CrosstermEvent>, Receiver<CrosstermEvent>) =
                channel::unbounded();

            requester_handle = thread::Builder::new()
                .name("requester".to_string())
                .spawn(move || requester.run(request_rx, response_tx))
                .unwrap();

            // Forward terminal events into the select loop.
            // NOTE: The forwarder thread blocks in read() and is never joined; it is
            // reaped when the process exits.
            let _term_event_forwarder_handle: JoinHandle<_> = thread::Builder::new()
                .name("term-events".to_string())
                .spawn(move || loop {
                    let term_event: CrosstermEvent = read().unwrap();
                    if term_event_tx.send(term_event).is_err() {
                        break;
                    }
                })
                .unwrap();

            // The flash timer. Arming it replaces any pending timeout.
            let mut flash_rx: Receiver<Instant> = channel::never();

            let mut size: Size = Size::from(terminal::size().unwrap());

            let mut early_exit = false;
            if let Some(effects) = root.on_created() {
                for effect in effects {
                    match effect {
                        SystemEffect::Request(request) => {
                            request_tx.send(request).unwrap();
                        }
                        SystemEffect::Timeout { duration } => {
                            flash_rx = channel::after(duration);
                        }
                        SystemEffect::Exit => {
                            #[cfg(feature = "logging")]
                            log::info!("Exiting.");
                            early_exit = true;
                            break;
                        }
                    }
                }
            }

            if !early_exit {
                loop {
                    let fabric: Fabric = root.render(size);

                    self.renderer.render(fabric);

                    let event: Event;
                    let mut flash_expired = false;
                    select! {
                        recv(term_event_rx) -> term_event => {
                            let term_event: CrosstermEvent = match term_event {
                                Ok(term_event) => term_event,
                                #[allow(unused_variables)]
                                Err(error) => {
                                    #[cfg(feature = "logging")]
                                    log::error!("Error receiving terminal event from channel: {}", error);
                                    break;
                                }
                            };
                            if let CrosstermEvent::Resize(columns, rows) = term_event {
                                size = Size::from((columns, rows));
                            }
                            event = Event::Crossterm(term_event);
                        },
                        recv(response_rx) -> response => {
                            let response: SearchResponse = match response {
                                Ok(response) => response,
                                #[allow(unused_variables)]
                                Err(error) => {
                                    #[cfg(feature = "logging")]
                                    log::error!("Error receiving response from channel: {}", error);
                                    break;
                                }
                            };
                            event = Event::Response(response);
                        },
                        recv(flash_rx) -> _instant => {
                            flash_expired = true;
                            event = Event::FlashExpired;
                        }
                    }
                    if flash_expired {
                        // The timer channel has fired and will never fire again; disarm it.
                        flash_rx = channel::never();
                    }

                    let effect: Option<SystemEffect> = root.handle(event);
                    match effect {
                        Some(SystemEffect::Request(request)) => {
                            request_tx.send(request).unwrap();
                        }
                        Some(SystemEffect::Timeout { duration }) => {
                            flash_rx = channel::after(duration);
                        }
                        Some(SystemEffect::Exit) => {
                            #[cfg(feature = "logging")]
                            log::info!("Exiting.");
                            break;
                        }
                        None => {}
                    }
                }
            }
        }

        #[cfg(feature = "logging")]
        log::info!("Joining requester thread...");
        requester_handle.join().unwrap();
        #[cfg(feature = "logging")]
        log::info!("Requester thread joined.");

        self.teardown();
    }

    fn set_up(&mut self) {
        self.lazy_enable_alternate_terminal();
        self.enable_raw_terminal();
        self.lazy_hide_cursor();
        self.lazy_clear_screen();

        self.change_panic_hook();
    }

    fn teardown(&mut self) {
        self.lazy_disable_alternate_terminal();
        self.disable_raw_terminal();
        self.lazy_show_cursor();
        self.update_terminal();
    }

    fn lazy_enable_alternate_terminal(&mut self) {
        self.stdout.queue(EnterAlternateScreen).unwrap();
    }

    fn lazy_disable_alternate_terminal(&mut self) {
        self.stdout.queue(LeaveAlternateScreen).unwrap();
    }

    fn enable_raw_terminal(&mut self) {
        terminal::enable_raw_mode().unwrap();
    }

    fn disable_raw_terminal(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }

    fn lazy_clear_screen(&mut self) {
        self.stdout
            .queue(ClearTerminal(TerminalClearType::All))
            .unwrap();
    }

    fn lazy_hide_cursor(&mut self) {
        self.stdout.queue(HideCursor).unwrap();
    }

    fn lazy_show_cursor(&mut self) {
        self.stdout.queue(ShowCursor).unwrap();
    }

    fn update_terminal(&mut self) {
        self.stdout.flush().unwrap();
    }

    fn change_panic_hook(&mut self) {
        let hook_before = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            stdout.queue(LeaveAlternateScreen).unwrap();
            stdout.queue(ShowCursor).unwrap();
            stdout.flush().unwrap();
            terminal::disable_raw_mode().unwrap();
            hook_before(info);
        }));
    }
}
