//! Rate limiter de requisições (controle de admissão)
//!
//! Limita quantas requisições saem para a rede dentro de cada intervalo.
//! Quando a capacidade acaba, as chamadas esperam numa fila FIFO e são
//! liberadas na virada do intervalo.
//!
//! ## Carry-over
//!
//! Capacidade não usada no intervalo anterior é somada ao orçamento do
//! próximo, limitada a `max_requests`. O orçamento de um intervalo nunca
//! passa de `2 * max_requests`.
//!
//! ## Cancelamento
//!
//! Descartar o future de [`RequestScheduler::submit`] (ou de
//! [`RequestScheduler::acquire`]) antes da admissão remove a entrada da fila
//! sem consumir capacidade. Depois de admitida, a tarefa não é cancelada
//! pelo scheduler.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Controle de admissão compartilhado entre todas as chamadas do cliente
#[derive(Clone)]
pub struct RequestScheduler {
    inner: Arc<Inner>,
}

struct Inner {
    max_requests: u32,
    interval: Duration,
    state: Mutex<State>,
}

struct State {
    window_start: Instant,
    remaining: u32,
    waiters: VecDeque<oneshot::Sender<()>>,
    timer_running: bool,
}

impl State {
    /// Avança a janela se o intervalo atual já terminou
    fn roll(&mut self, now: Instant, max_requests: u32, interval: Duration) {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < interval {
            return;
        }

        let windows = (elapsed.as_nanos() / interval.as_nanos()).min(u32::MAX as u128) as u32;
        // Mais de uma janela passou: a anterior ficou inteira sem uso
        let carry = if windows == 1 {
            self.remaining.min(max_requests)
        } else {
            max_requests
        };

        self.remaining = max_requests.saturating_add(carry);
        self.window_start += interval * windows;
    }

    /// Libera waiters do início da fila enquanto houver capacidade
    fn admit_waiters(&mut self) -> usize {
        let mut admitted = 0;

        while self.remaining > 0 {
            let Some(waiter) = self.waiters.pop_front() else {
                break;
            };
            // Receiver descartado = chamada cancelada antes da admissão
            if waiter.send(()).is_ok() {
                self.remaining -= 1;
                admitted += 1;
            }
        }

        self.waiters.retain(|w| !w.is_closed());
        admitted
    }
}

impl RequestScheduler {
    /// Cria o scheduler com `max_requests` por `interval`
    ///
    /// Valores zero são elevados ao mínimo (1 requisição, 1ms).
    pub fn new(max_requests: u32, interval: Duration) -> Self {
        let max_requests = max_requests.max(1);
        let interval = interval.max(Duration::from_millis(1));

        Self {
            inner: Arc::new(Inner {
                max_requests,
                interval,
                state: Mutex::new(State {
                    window_start: Instant::now(),
                    remaining: max_requests,
                    waiters: VecDeque::new(),
                    timer_running: false,
                }),
            }),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.inner.max_requests
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Capacidade ainda disponível no intervalo atual
    pub fn available(&self) -> u32 {
        let mut state = self.inner.lock();
        state.roll(Instant::now(), self.inner.max_requests, self.inner.interval);
        state.remaining
    }

    /// Chamadas esperando admissão
    pub fn pending(&self) -> usize {
        let state = self.inner.lock();
        state.waiters.iter().filter(|w| !w.is_closed()).count()
    }

    /// Espera uma vaga no intervalo atual (ou num próximo)
    pub async fn acquire(&self) {
        let rx = {
            let mut state = self.inner.lock();
            state.roll(Instant::now(), self.inner.max_requests, self.inner.interval);

            if state.waiters.is_empty() && state.remaining > 0 {
                state.remaining -= 1;
                return;
            }

            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            tracing::debug!(
                pending = state.waiters.len(),
                "Rate limit atingido, requisição na fila"
            );
            self.ensure_timer(&mut state);
            rx
        };

        // O timer mantém o Inner vivo enquanto houver waiters; um erro aqui
        // só acontece se o runtime estiver sendo desligado.
        let _ = rx.await;
    }

    /// Executa `task` quando houver capacidade e devolve o resultado dela
    ///
    /// Sucesso ou falha da tarefa consomem exatamente uma vaga.
    pub async fn submit<F, T>(&self, task: F) -> T
    where
        F: Future<Output = T>,
    {
        self.acquire().await;
        task.await
    }

    fn ensure_timer(&self, state: &mut State) {
        if state.timer_running {
            return;
        }
        state.timer_running = true;

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run_timer().await });
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_timer(self: Arc<Self>) {
        let mut reset = TimerReset {
            inner: Arc::clone(&self),
            armed: true,
        };

        loop {
            let deadline = self.lock().window_start + self.interval;
            tokio::time::sleep_until(deadline).await;

            let mut state = self.lock();
            state.roll(Instant::now(), self.max_requests, self.interval);
            let admitted = state.admit_waiters();

            tracing::debug!(
                admitted,
                pending = state.waiters.len(),
                remaining = state.remaining,
                "Novo intervalo do rate limiter"
            );

            if state.waiters.is_empty() {
                state.timer_running = false;
                reset.armed = false;
                return;
            }
        }
    }
}

/// Libera `timer_running` quando a task do timer é descartada sem terminar
/// (runtime desligado), para que o próximo `acquire` crie outro timer
struct TimerReset {
    inner: Arc<Inner>,
    armed: bool,
}

impl Drop for TimerReset {
    fn drop(&mut self) {
        if self.armed {
            self.inner.lock().timer_running = false;
        }
    }
}

impl std::fmt::Debug for RequestScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestScheduler")
            .field("max_requests", &self.inner.max_requests)
            .field("interval", &self.inner.interval)
            .finish()
    }
}
