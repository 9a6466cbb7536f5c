use anstream::{eprint, print};

/// Where command output goes. Logging is configured separately and is not affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Printer {
    /// Results on stdout, diagnostics on stderr.
    Default,
    /// Suppress results and diagnostics, leaving only the exit status.
    Quiet,
}

impl Printer {
    /// Return the [`Stdout`] for this printer.
    pub(crate) fn stdout(self) -> Stdout {
        match self {
            Self::Default => Stdout::Enabled,
            Self::Quiet => Stdout::Disabled,
        }
    }

    /// Return the [`Stderr`] for this printer.
    pub(crate) fn stderr(self) -> Stderr {
        match self {
            Self::Default => Stderr::Enabled,
            Self::Quiet => Stderr::Disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stdout {
    Enabled,
    Disabled,
}

impl std::fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if *self == Self::Enabled {
            #[allow(clippy::print_stdout)]
            {
                print!("{s}");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stderr {
    Enabled,
    Disabled,
}

impl std::fmt::Write for Stderr {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if *self == Self::Enabled {
            #[allow(clippy::print_stderr)]
            {
                eprint!("{s}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Printer, Stderr, Stdout};

    #[test]
    fn quiet_disables_both_streams() {
        assert_eq!(Printer::Default.stdout(), Stdout::Enabled);
        assert_eq!(Printer::Default.stderr(), Stderr::Enabled);
        assert_eq!(Printer::Quiet.stdout(), Stdout::Disabled);
        assert_eq!(Printer::Quiet.stderr(), Stderr::Disabled);
    }
}
