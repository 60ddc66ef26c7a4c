/// Declares the commands understood by an actor.
///
/// Generates a `Command` enum with one variant per entry (each carrying a
/// oneshot reply channel), a cloneable `CommandSender` with one async method
/// per command, and a `SpawnCommandSender` for fire-and-forget sends.
#[macro_export]
macro_rules! command {
    (
        $(
           $(#[$docs:meta])*
           $vis:vis $name:ident($($param:ident: $input:ty),*) $(-> $output:ty)?;
        )+
    ) => {
        #[allow(unused_parens)]
        pub enum Command {
        $(
            $(#[$docs])*
            $name {
                $($param: $input,)*
                resp_tx: tokio::sync::oneshot::Sender<($($output)?)>,
            },
        )+
        }

        impl Command {
            pub fn new_channel() -> (CommandSender, tokio::sync::mpsc::Receiver<Command>) {
                let (tx, rx) = tokio::sync::mpsc::channel($crate::config::COMMAND_BUFFER);
                (CommandSender { tx }, rx)
            }
        }

        #[derive(Clone)]
        pub struct CommandSender {
            tx: tokio::sync::mpsc::Sender<Command>,
        }

        #[allow(non_snake_case, unused_parens, dead_code)]
        impl CommandSender {
        $(
            $(#[$docs])*
            $vis async fn $name(&self, $($param: $input,)*) -> Result<($($output)?), $crate::misc::Closed> {
                let (resp_tx, resp_rx) = tokio::sync::oneshot::channel();
                let data = Command::$name { $($param,)* resp_tx };
                self.tx.send(data).await.map_err(|_| $crate::misc::Closed)?;
                resp_rx.await.map_err(|_| $crate::misc::Closed)
            }
        )+

            pub fn spawn(&self) -> SpawnCommandSender {
                SpawnCommandSender { tx: self.tx.clone() }
            }
        }

        pub struct SpawnCommandSender {
            tx: tokio::sync::mpsc::Sender<Command>,
        }

        #[allow(non_snake_case, dead_code)]
        impl SpawnCommandSender {
        $(
            $vis fn $name(self, $($param: $input,)*) {
                let (resp_tx, resp_rx) = tokio::sync::oneshot::channel();
                let data = Command::$name { $($param,)* resp_tx };
                let tx = self.tx;
                tokio::spawn(async move {
                    if tx.send(data).await.is_ok() {
                        let _ = resp_rx.await;
                    }
                });
            }
        )+
        }
    };
}
